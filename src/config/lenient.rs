use serde_json::{Map, Value};

use super::{ConfigWarning, raw::json_type_name};

/// What a known wire field may hold once it has been coerced.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// Strings, numbers and booleans; numbers and booleans become text later
    Text,
    /// Whole milliseconds, from a number or a numeric string
    Millis,
    /// Anything, read for truthiness
    Flag,
    /// A key/value object
    Object,
    /// The item list
    Items,
}

const CONFIG_FIELDS: &[(&str, Shape)] = &[
    ("interval", Shape::Millis),
    ("timeZone", Shape::Text),
    ("locale", Shape::Text),
    ("selectedColor", Shape::Text),
    ("background", Shape::Text),
    ("additionalCSS", Shape::Text),
    ("size", Shape::Text),
    ("fontSize", Shape::Text),
    ("fontWeight", Shape::Text),
    ("items", Shape::Items),
];

const ITEM_FIELDS: &[(&str, Shape)] = &[
    ("type", Shape::Text),
    ("selected", Shape::Flag),
    ("icon", Shape::Text),
    ("text", Shape::Text),
    ("secondLine", Shape::Text),
    ("iconTextSpacing", Shape::Text),
    ("pushToRight", Shape::Flag),
    ("horizontalPadding", Shape::Text),
    ("color", Shape::Text),
    ("fontSize", Shape::Text),
    ("fontWeight", Shape::Text),
    ("textAlign", Shape::Text),
    ("additionalCSS", Shape::Text),
    ("action", Shape::Text),
    ("entity", Shape::Text),
    ("navigation_path", Shape::Text),
    ("url_path", Shape::Text),
    ("url_target", Shape::Text),
    ("service", Shape::Text),
    ("service_data", Shape::Object),
    ("data", Shape::Object),
    ("target", Shape::Object),
];

/// Coerces every known field of a configuration object into a shape the
/// raw types accept.
///
/// Fields that cannot be coerced are dropped, so they fall back to their
/// defaults, and reported as [`ConfigWarning::Malformed`]. Items that are
/// not objects keep their slot as an empty item, so later items keep their
/// positions. `timeFormat` and `dateFormat` pass through untouched.
pub(super) fn coerce_config(
    document: &Map<String, Value>,
    warnings: &mut Vec<ConfigWarning>,
) -> Map<String, Value> {
    coerce_object(document, CONFIG_FIELDS, None, warnings)
}

fn coerce_object(
    object: &Map<String, Value>,
    fields: &[(&'static str, Shape)],
    index: Option<usize>,
    warnings: &mut Vec<ConfigWarning>,
) -> Map<String, Value> {
    let mut coerced = object.clone();

    for &(field, shape) in fields {
        let Some(value) = coerced.remove(field) else {
            continue;
        };

        match coerce(value, shape, warnings) {
            Ok(value) => {
                coerced.insert(field.to_string(), value);
            }
            Err(found) => warnings.push(ConfigWarning::Malformed {
                field,
                index,
                found,
            }),
        }
    }

    coerced
}

/// Returns the coerced value, or the JSON type that could not be used.
fn coerce(
    value: Value,
    shape: Shape,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<Value, &'static str> {
    match (shape, value) {
        (_, Value::Null) if !matches!(shape, Shape::Items) => Ok(Value::Null),

        (Shape::Text, value @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
            Ok(value)
        }

        (Shape::Millis, Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_millis))
            .map(Value::from)
            .ok_or("number"),
        (Shape::Millis, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(whole_millis)
            .map(Value::from)
            .ok_or("string"),

        (Shape::Flag, value) => Ok(Value::Bool(truthy(&value))),

        (Shape::Object, value @ Value::Object(_)) => Ok(value),

        (Shape::Items, Value::Null) => Ok(Value::Array(Vec::new())),
        (Shape::Items, Value::Array(items)) => Ok(Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| coerce_item(index, item, warnings))
                .collect(),
        )),

        (_, other) => Err(json_type_name(&other)),
    }
}

fn coerce_item(index: usize, item: Value, warnings: &mut Vec<ConfigWarning>) -> Value {
    match item {
        Value::Object(object) => {
            Value::Object(coerce_object(&object, ITEM_FIELDS, Some(index), warnings))
        }
        other => {
            warnings.push(ConfigWarning::Malformed {
                field: "items",
                index: Some(index),
                found: json_type_name(&other),
            });
            Value::Object(Map::new())
        }
    }
}

fn whole_millis(ms: f64) -> Option<i64> {
    // Truncates toward zero like a browser timer delay.
    ms.is_finite().then(|| ms.trunc() as i64)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
