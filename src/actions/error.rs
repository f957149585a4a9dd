use thiserror::Error;

use crate::{config::ActionKind, host::HostError};

/// Why an action's fields were rejected before reaching the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A required field is absent or blank
    #[error("missing '{0}'")]
    MissingField(&'static str),

    /// `service` is not `domain.service`
    #[error("invalid service format '{0}', expected 'domain.service'")]
    InvalidService(String),
}

/// Errors that stop a single item's action.
///
/// These never escape [`ActionDispatcher::dispatch`](super::ActionDispatcher::dispatch);
/// they are reported through its outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Required action fields are missing or malformed
    #[error("{action} action skipped: {failure}")]
    Validation {
        /// Action that was attempted
        action: ActionKind,
        /// What was wrong
        failure: ValidationFailure,
    },

    /// The host failed while performing the action
    #[error("{action} action failed: {source}")]
    Execution {
        /// Action that was attempted
        action: ActionKind,
        /// Host error
        #[source]
        source: HostError,
    },

    /// The action tag is not supported
    #[error("unrecognized action '{0}'")]
    Unrecognized(String),
}

impl DispatchError {
    pub(crate) fn missing(action: ActionKind, field: &'static str) -> Self {
        DispatchError::Validation {
            action,
            failure: ValidationFailure::MissingField(field),
        }
    }
}
