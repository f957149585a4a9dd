//! Configuration schema, normalization and loading.
//!
//! The host hands over a loosely-typed [`RawConfig`]; [`normalize`] turns it
//! into a canonical [`Configuration`] plus the list of [`ConfigWarning`]s
//! recovered along the way. Normalization never fails.

mod error;
mod item;
mod lenient;
mod loading;
mod raw;
mod stub;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigWarning};
pub use item::{ActionKind, ActionTag, Item, ItemAction, ItemKind};
pub use loading::{load_file, parse};
pub(crate) use loading::read_document;
pub use raw::{RawConfig, RawItem};
pub use stub::stub_config;

use std::time::Duration;

use schemars::{Schema, schema_for};
use serde_json::Value;
use tracing::debug;

/// Refresh period used when `interval` is absent or invalid.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
/// Default icon size.
pub const DEFAULT_SIZE: &str = "32px";
/// Default bar font size.
pub const DEFAULT_FONT_SIZE: &str = "20px";
/// Default bar background, following the host theme.
pub const DEFAULT_BACKGROUND: &str = "var(--primary-background-color, white)";
/// Default time pattern.
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss";
/// Default date pattern.
pub const DEFAULT_DATE_FORMAT: &str = "cccc d LLLL yyyy";

const SUPPRESS_KEYWORD: &str = "none";

/// How a date or time field should be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatPattern {
    /// Format with this pattern
    Pattern(String),
    /// The `"none"` keyword: always the empty string
    Suppressed,
    /// Not a string: always the wrong-format sentinel
    Invalid,
}

impl FormatPattern {
    fn from_raw(
        value: Option<&Value>,
        field: &'static str,
        default: &str,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Self {
        match value {
            None | Some(Value::Null) => {
                warnings.push(ConfigWarning::Defaulted {
                    field,
                    value: default.to_string(),
                });
                FormatPattern::Pattern(default.to_string())
            }
            Some(Value::String(s)) if s.is_empty() => {
                warnings.push(ConfigWarning::Defaulted {
                    field,
                    value: default.to_string(),
                });
                FormatPattern::Pattern(default.to_string())
            }
            Some(Value::String(s)) if s.trim().eq_ignore_ascii_case(SUPPRESS_KEYWORD) => {
                FormatPattern::Suppressed
            }
            Some(Value::String(s)) => FormatPattern::Pattern(s.clone()),
            Some(_) => {
                warnings.push(ConfigWarning::NonStringFormat { field });
                FormatPattern::Invalid
            }
        }
    }
}

/// Canonical, render-ready configuration.
///
/// Replaced wholesale on every `set_config`; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Clock refresh period
    pub interval: Duration,
    /// Time pattern
    pub time_format: FormatPattern,
    /// Date pattern
    pub date_format: FormatPattern,
    /// Time zone override
    pub time_zone: Option<String>,
    /// Locale override
    pub locale: Option<String>,
    /// Selected item color override
    pub selected_color: Option<String>,
    /// Icon size
    pub size: String,
    /// Bar font size
    pub font_size: String,
    /// Bar font weight
    pub font_weight: Option<String>,
    /// Bar background
    pub background: String,
    /// CSS appended to the bar style
    pub additional_css: Option<String>,
    /// Items in display order
    pub items: Vec<Item>,
}

impl Default for Configuration {
    fn default() -> Self {
        normalize(RawConfig::default()).config
    }
}

/// Result of [`normalize`].
#[derive(Debug, Clone)]
pub struct Normalized {
    /// The canonical configuration.
    pub config: Configuration,
    /// Problems recovered by defaulting.
    pub warnings: Vec<ConfigWarning>,
}

/// Turns a raw configuration into a canonical one, defaulting what is missing.
///
/// Takes the raw value by value so the result never aliases caller data.
pub fn normalize(raw: RawConfig) -> Normalized {
    let mut warnings = raw.recovered;

    let interval = match raw.interval {
        Some(ms) if ms > 0 => Duration::from_millis(ms.unsigned_abs()),
        Some(ms) => {
            warnings.push(ConfigWarning::InvalidInterval { value: ms });
            Duration::from_millis(DEFAULT_INTERVAL_MS)
        }
        None => Duration::from_millis(DEFAULT_INTERVAL_MS),
    };

    let time_format = FormatPattern::from_raw(
        raw.time_format.as_ref(),
        "timeFormat",
        DEFAULT_TIME_FORMAT,
        &mut warnings,
    );
    let date_format = FormatPattern::from_raw(
        raw.date_format.as_ref(),
        "dateFormat",
        DEFAULT_DATE_FORMAT,
        &mut warnings,
    );

    let size = or_default(raw.size, "size", DEFAULT_SIZE, &mut warnings);
    let font_size = or_default(raw.font_size, "fontSize", DEFAULT_FONT_SIZE, &mut warnings);
    let background = or_default(raw.background, "background", DEFAULT_BACKGROUND, &mut warnings);

    let items = raw
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| normalize_item(index, item, &mut warnings))
        .collect();

    for warning in &warnings {
        debug!(%warning, "Configuration defaulted");
    }

    Normalized {
        config: Configuration {
            interval,
            time_format,
            date_format,
            time_zone: non_blank(raw.time_zone),
            locale: non_blank(raw.locale),
            selected_color: non_blank(raw.selected_color),
            size,
            font_size,
            font_weight: non_blank(raw.font_weight),
            background,
            additional_css: non_blank(raw.additional_css),
            items,
        },
        warnings,
    }
}

fn normalize_item(index: usize, raw: RawItem, warnings: &mut Vec<ConfigWarning>) -> Item {
    let kind = match raw.kind.as_deref() {
        None => ItemKind::Text,
        Some(tag) => ItemKind::from_tag(tag).unwrap_or_else(|| {
            warnings.push(ConfigWarning::UnknownItemType {
                index,
                kind: tag.to_string(),
            });
            ItemKind::Text
        }),
    };

    let action = non_blank(raw.action).map(|tag| {
        let tag = match ActionKind::from_tag(tag.trim()) {
            Some(kind) => ActionTag::Known(kind),
            None => {
                warnings.push(ConfigWarning::UnknownAction {
                    index,
                    action: tag.clone(),
                });
                ActionTag::Unrecognized(tag)
            }
        };

        ItemAction {
            tag,
            entity: raw.entity,
            navigation_path: raw.navigation_path,
            url_path: raw.url_path,
            url_target: raw.url_target,
            service: raw.service,
            service_data: raw.service_data,
            data: raw.data,
            target: raw.target,
        }
    });

    Item {
        kind,
        selected: raw.selected.unwrap_or(false),
        icon: raw.icon,
        text: raw.text,
        second_line: non_blank(raw.second_line),
        icon_text_spacing: non_blank(raw.icon_text_spacing),
        push_to_right: raw.push_to_right.unwrap_or(false),
        horizontal_padding: non_blank(raw.horizontal_padding),
        color: non_blank(raw.color),
        font_size: non_blank(raw.font_size),
        font_weight: non_blank(raw.font_weight),
        text_align: non_blank(raw.text_align),
        additional_css: non_blank(raw.additional_css),
        action,
    }
}

fn or_default(
    value: Option<String>,
    field: &'static str,
    default: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            warnings.push(ConfigWarning::Defaulted {
                field,
                value: default.to_string(),
            });
            default.to_string()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// JSON Schema describing [`RawConfig`].
pub fn schema() -> Schema {
    schema_for!(RawConfig)
}
