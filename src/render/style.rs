use crate::config::{Configuration, Item};

/// Text color used when an item sets none.
pub const DEFAULT_COLOR: &str = "grey";

/// Inline style for an item, before template resolution.
pub fn item_style(item: &Item) -> String {
    let mut rules = Vec::new();

    if item.push_to_right {
        rules.push("margin-left:auto;".to_string());
    }
    if let Some(padding) = &item.horizontal_padding {
        rules.push(format!("padding-left:{padding};padding-right:{padding};"));
    }
    rules.push(format!(
        "color:{};",
        item.color.as_deref().unwrap_or(DEFAULT_COLOR)
    ));
    if let Some(size) = &item.font_size {
        rules.push(format!("font-size:{size};"));
    }
    if let Some(weight) = &item.font_weight {
        rules.push(format!("font-weight:{weight};"));
    }
    if let Some(align) = &item.text_align {
        rules.push(format!("text-align:{align};"));
    }
    rules.push(format!(
        "cursor:{};",
        if item.has_action() { "pointer" } else { "default" }
    ));
    if let Some(css) = &item.additional_css {
        rules.push(css.clone());
    }

    rules.join(" ")
}

/// Inline style for the bar container.
pub fn menu_style(config: &Configuration) -> String {
    let mut rules = vec![
        format!("background:{};", config.background),
        format!("font-size:{};", config.font_size),
    ];

    if let Some(weight) = &config.font_weight {
        rules.push(format!("font-weight:{weight};"));
    }
    if let Some(color) = &config.selected_color {
        rules.push(format!("--primary-color:{color};"));
    }
    if let Some(css) = &config.additional_css {
        rules.push(css.clone());
    }

    rules.join(" ")
}
