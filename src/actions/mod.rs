//! Click action dispatch.
//!
//! Each [`ActionKind`] maps to one handler that validates the fields it needs
//! and then performs exactly one effect on the host. Failures are logged and
//! returned as a [`DispatchOutcome`]; nothing propagates to the caller, so a
//! broken item never takes the rest of the bar down with it.

mod error;
mod handlers;


pub use error::{DispatchError, ValidationFailure};
pub use handlers::{DEFAULT_URL_TARGET, TOGGLE_DOMAIN, TOGGLE_SERVICE};

use tracing::{error, warn};

use crate::{
    config::{ActionKind, ActionTag, Item},
    host::Host,
};

/// What happened when an item was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The item has no action
    Idle,
    /// The action was handed to the host
    Dispatched(ActionKind),
    /// The action was skipped or failed
    Failed(DispatchError),
}

impl DispatchOutcome {
    /// Whether the host received the action.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched(_))
    }
}

/// Runs item actions against a host.
pub struct ActionDispatcher<'h> {
    host: &'h dyn Host,
}

impl<'h> ActionDispatcher<'h> {
    /// Creates a dispatcher over `host`.
    pub fn new(host: &'h dyn Host) -> Self {
        Self { host }
    }

    /// Performs the item's action, if any.
    pub fn dispatch(&self, item: &Item) -> DispatchOutcome {
        let Some(action) = item.action.as_ref() else {
            return DispatchOutcome::Idle;
        };

        let kind = match &action.tag {
            ActionTag::Known(kind) => *kind,
            ActionTag::Unrecognized(tag) => {
                warn!(action = %tag, ?item, "Unrecognized action");
                return DispatchOutcome::Failed(DispatchError::Unrecognized(tag.clone()));
            }
        };

        match handlers::handler_for(kind)(action, self.host) {
            Ok(()) => DispatchOutcome::Dispatched(kind),
            Err(e @ DispatchError::Execution { .. }) => {
                error!(action = %kind, ?item, error = %e, "Error executing action");
                DispatchOutcome::Failed(e)
            }
            Err(e) => {
                warn!(action = %kind, ?item, error = %e, "Action not executed");
                DispatchOutcome::Failed(e)
            }
        }
    }
}
