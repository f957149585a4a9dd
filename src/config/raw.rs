use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::ConfigWarning;

/// Configuration exactly as the host hands it over.
///
/// Field names follow the card's wire format. Every field is optional;
/// [`normalize`](super::normalize) fills in the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Milliseconds between clock refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,

    /// Time pattern (Luxon-style tokens or strftime), or `"none"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<Value>,

    /// Date pattern (Luxon-style tokens or strftime), or `"none"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<Value>,

    /// IANA time zone name overriding the host's zone.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Locale overriding the host's language (e.g. `fr`, `en-GB`).
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Color used for the selected item underline.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,

    /// Bar background.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// CSS appended to the bar style.
    #[serde(
        rename = "additionalCSS",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none",
    )]
    pub additional_css: Option<String>,

    /// Icon size.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Bar font size.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    /// Bar font weight.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,

    /// Items in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RawItem>,

    /// Fields [`parse`](super::parse) had to ignore. Not part of the wire
    /// format; [`normalize`](super::normalize) reports them as warnings.
    #[serde(skip)]
    pub recovered: Vec<ConfigWarning>,
}

/// One bar item as configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Render shape: `label`, `label-2lines`, `icon-text`, `icon` or `text`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none",
    )]
    pub kind: Option<String>,

    /// Whether the item is highlighted as the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    /// Icon name, e.g. `mdi:home`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Primary text; may contain `{{ token }}` placeholders.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Second line for `label-2lines`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub second_line: Option<String>,

    /// Gap between icon and text.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub icon_text_spacing: Option<String>,

    /// Push this item (and the ones after it) to the right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_to_right: Option<bool>,

    /// Left and right padding.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<String>,

    /// Text color.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Font size.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    /// Font weight.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,

    /// Text alignment.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    /// CSS appended to the item style.
    #[serde(
        rename = "additionalCSS",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none",
    )]
    pub additional_css: Option<String>,

    /// Action tag: `navigate`, `url`, `toggle`, `call-service` or `more-info`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Entity for `toggle` and `more-info`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Client-side path for `navigate`.
    #[serde(
        rename = "navigation_path",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none",
    )]
    pub navigation_path: Option<String>,

    /// Address for `url`.
    #[serde(
        rename = "url_path",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none",
    )]
    pub url_path: Option<String>,

    /// Browsing context for `url`, `_blank` when unset.
    #[serde(
        rename = "url_target",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none",
    )]
    pub url_target: Option<String>,

    /// `domain.service` for `call-service`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Payload for `call-service`.
    #[serde(rename = "service_data", default, skip_serializing_if = "Option::is_none")]
    pub service_data: Option<Map<String, Value>>,

    /// Legacy payload field, used when `service_data` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,

    /// Explicit service target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Map<String, Value>>,
}

/// Accepts strings, numbers and booleans, turning the latter two into text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
