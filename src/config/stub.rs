use serde_json::{Value, json};

/// Example configuration offered by card pickers.
pub fn stub_config() -> Value {
    json!({
        "size": "32px",
        "fontSize": "large",
        "items": [
            {
                "type": "icon",
                "text": "Home",
                "icon": "mdi:home",
                "selected": true,
                "action": "navigate",
                "navigation_path": "/lovelace/0"
            },
            {
                "text": "Lights",
                "action": "navigate",
                "navigation_path": "/lovelace/lights"
            },
            {
                "text": "{{ time }}",
                "type": "label",
                "icon": "mdi:clock",
                "color": "black",
                "pushToRight": true,
                "horizontalPadding": "10px"
            },
            {
                "text": "settingsIcon",
                "type": "icon",
                "icon": "mdi:cog",
                "horizontalPadding": "10px"
            }
        ]
    })
}
