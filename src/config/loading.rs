use std::{fs, path::Path};

use serde_json::Value;
use tracing::{instrument, warn};

use super::{ConfigError, RawConfig, lenient, raw::json_type_name};

/// Reads a raw configuration from a host-provided value.
///
/// Fields of the wrong type are coerced where possible and otherwise
/// ignored; they end up in [`RawConfig::recovered`].
///
/// # Errors
/// Returns `ConfigError::NotAnObject` if the value is not a key/value object.
pub fn parse(value: &Value) -> Result<RawConfig, ConfigError> {
    let Value::Object(document) = value else {
        return Err(ConfigError::NotAnObject {
            found: json_type_name(value),
        });
    };

    let mut recovered = Vec::new();
    let document = lenient::coerce_config(document, &mut recovered);
    for warning in &recovered {
        warn!(%warning, "Ignoring malformed configuration field");
    }

    let mut raw = RawConfig::deserialize_value(Value::Object(document))?;
    raw.recovered = recovered;
    Ok(raw)
}

/// Loads a raw configuration from a `.toml` or `.json` file.
///
/// The format is chosen by extension; anything other than `.json` is read
/// as TOML.
///
/// # Errors
/// Returns error if the file cannot be read, is not valid TOML/JSON, or
/// does not describe a configuration object.
#[instrument]
pub fn load_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    parse(&read_document(path, &content)?)
}

pub(crate) fn read_document(path: &Path, content: &str) -> Result<Value, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        return serde_json::from_str(content).map_err(|e| ConfigError::Malformed {
            details: e.to_string(),
        });
    }

    let document: toml::Value =
        toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            location: path.to_string_lossy().to_string(),
            details: e.to_string(),
        })?;

    serde_json::to_value(document).map_err(|e| ConfigError::Malformed {
        details: e.to_string(),
    })
}

impl RawConfig {
    fn deserialize_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Malformed {
            details: e.to_string(),
        })
    }
}
