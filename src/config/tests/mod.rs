//! Unit tests for config module
//!
//! Tests parsing, defaults, and item normalization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::time::Duration;

use serde_json::json;

use crate::config::{
    ActionKind, ActionTag, ConfigError, ConfigWarning, DEFAULT_BACKGROUND, DEFAULT_DATE_FORMAT,
    DEFAULT_FONT_SIZE, DEFAULT_SIZE, DEFAULT_TIME_FORMAT, FormatPattern, ItemKind, RawConfig,
    normalize, parse, stub_config,
};

fn normalized(value: serde_json::Value) -> crate::config::Normalized {
    normalize(parse(&value).unwrap())
}

#[test]
fn empty_config_gets_every_default() {
    let result = normalized(json!({}));
    let config = result.config;

    assert_eq!(config.interval, Duration::from_millis(1000));
    assert_eq!(config.size, DEFAULT_SIZE);
    assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    assert_eq!(config.background, DEFAULT_BACKGROUND);
    assert_eq!(
        config.time_format,
        FormatPattern::Pattern(DEFAULT_TIME_FORMAT.to_string())
    );
    assert_eq!(
        config.date_format,
        FormatPattern::Pattern(DEFAULT_DATE_FORMAT.to_string())
    );
    assert!(config.items.is_empty());
    assert!(result.warnings.contains(&ConfigWarning::Defaulted {
        field: "size",
        value: DEFAULT_SIZE.to_string(),
    }));
}

#[test]
fn empty_strings_are_defaulted_like_missing_fields() {
    let config = normalized(json!({
        "size": "",
        "fontSize": "",
        "background": "",
        "timeFormat": "",
        "dateFormat": ""
    }))
    .config;

    assert_eq!(config.size, DEFAULT_SIZE);
    assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    assert_eq!(config.background, DEFAULT_BACKGROUND);
    assert_eq!(
        config.time_format,
        FormatPattern::Pattern(DEFAULT_TIME_FORMAT.to_string())
    );
    assert_eq!(
        config.date_format,
        FormatPattern::Pattern(DEFAULT_DATE_FORMAT.to_string())
    );
}

#[test]
fn explicit_values_are_kept() {
    let config = normalized(json!({
        "interval": 5000,
        "size": "24px",
        "fontSize": 18,
        "background": "black",
        "timeFormat": "HH:mm",
        "dateFormat": "dd/MM",
        "timeZone": "Europe/Paris",
        "locale": "fr"
    }))
    .config;

    assert_eq!(config.interval, Duration::from_millis(5000));
    assert_eq!(config.size, "24px");
    assert_eq!(config.font_size, "18");
    assert_eq!(config.background, "black");
    assert_eq!(config.time_format, FormatPattern::Pattern("HH:mm".to_string()));
    assert_eq!(config.date_format, FormatPattern::Pattern("dd/MM".to_string()));
    assert_eq!(config.time_zone.as_deref(), Some("Europe/Paris"));
    assert_eq!(config.locale.as_deref(), Some("fr"));
}

#[test]
fn none_keyword_suppresses_formats_case_insensitively() {
    let config = normalized(json!({ "timeFormat": "NONE", "dateFormat": " None " })).config;

    assert_eq!(config.time_format, FormatPattern::Suppressed);
    assert_eq!(config.date_format, FormatPattern::Suppressed);
}

#[test]
fn non_string_formats_are_flagged_invalid() {
    let result = normalized(json!({ "timeFormat": 12, "dateFormat": ["d"] }));

    assert_eq!(result.config.time_format, FormatPattern::Invalid);
    assert_eq!(result.config.date_format, FormatPattern::Invalid);
    assert!(result
        .warnings
        .contains(&ConfigWarning::NonStringFormat { field: "timeFormat" }));
}

#[test]
fn non_positive_interval_falls_back_to_default() {
    let result = normalized(json!({ "interval": 0 }));

    assert_eq!(result.config.interval, Duration::from_millis(1000));
    assert!(result
        .warnings
        .contains(&ConfigWarning::InvalidInterval { value: 0 }));
}

#[test]
fn item_types_map_to_shapes() {
    let config = normalized(json!({
        "items": [
            { "type": "label" },
            { "type": "label-2lines" },
            { "type": "icon-text" },
            { "type": "icon" },
            { "type": "text" },
            {}
        ]
    }))
    .config;

    let kinds: Vec<ItemKind> = config.items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ItemKind::Label,
            ItemKind::TwoLineLabel,
            ItemKind::IconText,
            ItemKind::Icon,
            ItemKind::Text,
            ItemKind::Text,
        ]
    );
}

#[test]
fn unknown_item_type_renders_as_text_with_warning() {
    let result = normalized(json!({ "items": [{ "type": "banner", "text": "x" }] }));

    assert_eq!(result.config.items[0].kind, ItemKind::Text);
    assert!(result.warnings.contains(&ConfigWarning::UnknownItemType {
        index: 0,
        kind: "banner".to_string(),
    }));
}

#[test]
fn action_fields_are_carried_with_their_tag() {
    let config = normalized(json!({
        "items": [{
            "action": "call-service",
            "service": "light.turn_on",
            "service_data": { "entity_id": "light.kitchen" },
            "target": { "area_id": "kitchen" }
        }]
    }))
    .config;

    let action = config.items[0].action.as_ref().unwrap();
    assert_eq!(action.tag, ActionTag::Known(ActionKind::CallService));
    assert_eq!(action.service.as_deref(), Some("light.turn_on"));
    assert_eq!(
        action.service_data.as_ref().unwrap()["entity_id"],
        json!("light.kitchen")
    );
    assert_eq!(action.target.as_ref().unwrap()["area_id"], json!("kitchen"));
}

#[test]
fn unknown_action_is_kept_for_dispatch_to_report() {
    let result = normalized(json!({ "items": [{ "action": "teleport" }] }));

    let action = result.config.items[0].action.as_ref().unwrap();
    assert_eq!(action.tag, ActionTag::Unrecognized("teleport".to_string()));
    assert!(result.warnings.contains(&ConfigWarning::UnknownAction {
        index: 0,
        action: "teleport".to_string(),
    }));
}

#[test]
fn items_without_action_are_inert() {
    let config = normalized(json!({ "items": [{ "text": "a" }, { "text": "b", "action": "" }] })).config;

    assert!(!config.items[0].has_action());
    assert!(!config.items[1].has_action());
}

#[test]
fn normalized_config_does_not_alias_raw_input() {
    let raw = parse(&json!({
        "items": [{ "action": "call-service", "service_data": { "entity_id": "a.b" } }]
    }))
    .unwrap();
    let kept = raw.clone();

    let config = normalize(raw).config;
    assert_eq!(
        config.items[0].action.as_ref().unwrap().service_data,
        kept.items[0].service_data
    );
}

#[test]
fn parse_rejects_non_objects() {
    let error = parse(&json!([1, 2])).unwrap_err();
    assert!(matches!(error, ConfigError::NotAnObject { found: "array" }));
}

#[test]
fn interval_accepts_numeric_strings_and_fractions() {
    for (interval, expected) in [
        (json!("5000"), 5000),
        (json!(" 250 "), 250),
        (json!(1500.0), 1500),
        (json!(1500.9), 1500),
    ] {
        let result = normalized(json!({ "interval": interval }));
        assert_eq!(result.config.interval, Duration::from_millis(expected));
        assert!(
            !result
                .warnings
                .iter()
                .any(|w| matches!(w, ConfigWarning::Malformed { .. }))
        );
    }
}

#[test]
fn unreadable_interval_falls_back_to_default() {
    for (interval, found) in [
        (json!("soon"), "string"),
        (json!(true), "boolean"),
        (json!([5]), "array"),
    ] {
        let result = normalized(json!({ "interval": interval }));

        assert_eq!(result.config.interval, Duration::from_millis(1000));
        assert!(result.warnings.contains(&ConfigWarning::Malformed {
            field: "interval",
            index: None,
            found,
        }));
    }
}

#[test]
fn flags_follow_truthiness() {
    let config = normalized(json!({
        "items": [
            { "selected": "yes", "pushToRight": 1 },
            { "selected": "", "pushToRight": 0 },
            { "selected": null, "pushToRight": {} }
        ]
    }))
    .config;

    let flags: Vec<_> = config.items.iter().map(|i| (i.selected, i.push_to_right)).collect();
    assert_eq!(flags, [(true, true), (false, false), (false, true)]);
}

#[test]
fn malformed_item_field_is_ignored_and_neighbours_kept() {
    let result = normalized(json!({
        "items": [
            { "text": "ok" },
            {
                "text": "bad",
                "icon": ["mdi:x"],
                "action": "call-service",
                "service": "light.turn_on",
                "service_data": "oops"
            },
            { "text": "after", "color": "red" }
        ]
    }));
    let items = &result.config.items;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].text.as_deref(), Some("ok"));
    assert_eq!(items[1].text.as_deref(), Some("bad"));
    assert_eq!(items[1].icon, None);
    let action = items[1].action.as_ref().unwrap();
    assert_eq!(action.tag, ActionTag::Known(ActionKind::CallService));
    assert_eq!(action.service_data, None);
    assert_eq!(items[2].color.as_deref(), Some("red"));

    assert!(result.warnings.contains(&ConfigWarning::Malformed {
        field: "icon",
        index: Some(1),
        found: "array",
    }));
    assert!(result.warnings.contains(&ConfigWarning::Malformed {
        field: "service_data",
        index: Some(1),
        found: "string",
    }));
}

#[test]
fn items_that_are_not_a_list_are_ignored() {
    let result = normalized(json!({ "size": "40px", "items": "not a list" }));

    assert!(result.config.items.is_empty());
    assert_eq!(result.config.size, "40px");
    assert!(result.warnings.contains(&ConfigWarning::Malformed {
        field: "items",
        index: None,
        found: "string",
    }));
}

#[test]
fn non_object_items_keep_their_slot() {
    let result = normalized(json!({ "items": ["home", { "text": "second" }] }));

    assert_eq!(result.config.items.len(), 2);
    assert_eq!(result.config.items[0].text, None);
    assert_eq!(result.config.items[1].text.as_deref(), Some("second"));
    assert!(result.warnings.contains(&ConfigWarning::Malformed {
        field: "items",
        index: Some(0),
        found: "string",
    }));
}

#[test]
fn malformed_warning_names_the_item() {
    let item = ConfigWarning::Malformed {
        field: "service_data",
        index: Some(3),
        found: "string",
    };
    let bar = ConfigWarning::Malformed {
        field: "size",
        index: None,
        found: "object",
    };

    assert_eq!(
        item.to_string(),
        "item 3: 'service_data' has the wrong type (string), ignoring it"
    );
    assert_eq!(bar.to_string(), "'size' has the wrong type (object), ignoring it");
}

#[test]
fn blank_second_line_counts_as_unset() {
    let config = normalized(json!({
        "items": [
            { "type": "label-2lines", "secondLine": "" },
            { "type": "label-2lines", "secondLine": "  " },
            { "type": "label-2lines", "secondLine": "Kitchen" }
        ]
    }))
    .config;

    assert_eq!(config.items[0].second_line, None);
    assert_eq!(config.items[1].second_line, None);
    assert_eq!(config.items[2].second_line.as_deref(), Some("Kitchen"));
}

#[test]
fn lenient_strings_accept_numbers_and_booleans() {
    let raw = parse(&json!({ "size": 32, "items": [{ "text": true }] })).unwrap();

    assert_eq!(raw.size.as_deref(), Some("32"));
    assert_eq!(raw.items[0].text.as_deref(), Some("true"));
}

#[test]
fn renamed_fields_keep_their_wire_names() {
    let wire = json!({
        "additionalCSS": "gap:4px;",
        "items": [{ "type": "icon", "additionalCSS": "opacity:0.5;", "url_target": "_self" }]
    });
    let raw = parse(&wire).unwrap();

    assert_eq!(raw.additional_css.as_deref(), Some("gap:4px;"));
    assert_eq!(raw.items[0].kind.as_deref(), Some("icon"));
    assert_eq!(raw.items[0].url_target.as_deref(), Some("_self"));
    assert_eq!(serde_json::to_value(&raw).unwrap(), wire);
}

#[test]
fn raw_config_reads_from_toml() {
    let toml_str = r#"
interval = 2000
timeFormat = "HH:mm"

[[items]]
type = "icon"
icon = "mdi:cog"
action = "navigate"
navigation_path = "/settings"
"#;

    let raw: RawConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(raw.interval, Some(2000));
    assert_eq!(raw.items[0].navigation_path.as_deref(), Some("/settings"));
}

#[test]
fn stub_config_normalizes_without_errors() {
    let result = normalized(stub_config());

    assert_eq!(result.config.items.len(), 4);
    assert!(result.config.items[0].selected);
    assert_eq!(result.config.items[0].kind, ItemKind::Icon);
    assert!(result.config.items[2].push_to_right);
}
