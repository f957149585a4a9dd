use thiserror::Error;

use crate::NavbarError;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when an argument passes clap's parsing but makes no sense
    /// for the loaded configuration, such as an item index out of range.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the navbar itself.
    ///
    /// Wraps configuration and clock errors.
    #[error(transparent)]
    Navbar(#[from] NavbarError),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for command execution results.
///
/// Commands return their output as a String so the binary decides where it
/// goes.
pub type CommandResult = Result<String, CliError>;
