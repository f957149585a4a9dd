use thiserror::Error;

use crate::{clock::ClockError, config::ConfigError};

/// Error types for the navbar crate.
///
/// Covers the operations that can fail outright. Action failures are not
/// here; they are reported per click through `DispatchOutcome`.
#[derive(Error, Debug)]
pub enum NavbarError {
    /// Configuration could not be accepted
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The clock could not be scheduled
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// A specialized `Result` type for navbar operations.
pub type Result<T> = std::result::Result<T, NavbarError>;
