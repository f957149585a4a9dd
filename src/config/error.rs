use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Errors that reject a configuration outright.
///
/// Normalization itself never fails; these only occur when the raw value
/// cannot be read as a configuration at all.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration root is not a key/value object
    #[error("configuration must be an object, found {found}")]
    NotAnObject {
        /// JSON type that was provided instead
        found: &'static str,
    },

    /// The document could not be read as JSON
    #[error("invalid configuration: {details}")]
    Malformed {
        /// Deserializer error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A configuration problem recovered by falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A field was absent or empty and received its default value
    Defaulted {
        /// Wire name of the field
        field: &'static str,
        /// Value that was applied
        value: String,
    },

    /// `interval` was zero or negative
    InvalidInterval {
        /// The rejected value
        value: i64,
    },

    /// A format field held something other than a string
    NonStringFormat {
        /// Wire name of the field
        field: &'static str,
    },

    /// An item `type` did not match a known shape and renders as text
    UnknownItemType {
        /// Position of the item in the list
        index: usize,
        /// The unrecognized tag
        kind: String,
    },

    /// An item action tag is not one of the supported actions
    UnknownAction {
        /// Position of the item in the list
        index: usize,
        /// The unrecognized tag
        action: String,
    },

    /// A field held a value of the wrong type and was ignored
    Malformed {
        /// Wire name of the field
        field: &'static str,
        /// Position of the item, for item fields and item entries
        index: Option<usize>,
        /// JSON type that was found
        found: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::Defaulted { field, value } => {
                write!(f, "'{field}' not set, using '{value}'")
            }
            ConfigWarning::InvalidInterval { value } => {
                write!(f, "interval {value} is not positive, using default")
            }
            ConfigWarning::NonStringFormat { field } => {
                write!(f, "'{field}' is not a string")
            }
            ConfigWarning::UnknownItemType { index, kind } => {
                write!(f, "item {index}: unknown type '{kind}', rendering as text")
            }
            ConfigWarning::UnknownAction { index, action } => {
                write!(f, "item {index}: unknown action '{action}'")
            }
            ConfigWarning::Malformed {
                field,
                index: Some(index),
                found,
            } => {
                write!(f, "item {index}: '{field}' has the wrong type ({found}), ignoring it")
            }
            ConfigWarning::Malformed {
                field,
                index: None,
                found,
            } => {
                write!(f, "'{field}' has the wrong type ({found}), ignoring it")
            }
        }
    }
}
