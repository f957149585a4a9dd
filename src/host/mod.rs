//! Boundary to the dashboard host.
//!
//! The host owns live entity state, service invocation and navigation. The
//! navbar only reads from it and fires effects at it.

pub mod offline;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors reported by the host while performing an effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host refused the operation
    #[error("host rejected {operation}: {reason}")]
    Rejected {
        /// Operation that was attempted
        operation: String,
        /// Reason given by the host
        reason: String,
    },

    /// The host surface needed for the operation is not available
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// A `domain.service` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    /// Service domain, e.g. `light`
    pub domain: String,
    /// Service name, e.g. `turn_on`
    pub service: String,
    /// Payload
    pub data: Map<String, Value>,
    /// Target selector
    pub target: Map<String, Value>,
}

/// Host surface consumed by the navbar.
///
/// Reads are infallible and return `None` when the host has nothing to
/// offer. Effects are fire-and-forget; an `Err` only reports that the host
/// could not accept the request.
pub trait Host: Send + Sync + 'static {
    /// Display name of the current user.
    fn user_name(&self) -> Option<String>;

    /// Current state of an entity.
    fn entity_state(&self, entity_id: &str) -> Option<String>;

    /// Host time zone.
    fn time_zone(&self) -> Option<String>;

    /// Host UI language.
    fn language(&self) -> Option<String>;

    /// Invokes a service.
    fn call_service(&self, call: ServiceCall) -> Result<(), HostError>;

    /// Pushes a client-side location.
    fn push_location(&self, path: &str) -> Result<(), HostError>;

    /// Announces that the location changed.
    fn notify_location_changed(&self) -> Result<(), HostError>;

    /// Opens an address in a browsing context.
    fn open_browsing_context(&self, url: &str, target: &str) -> Result<(), HostError>;

    /// Asks the host to show an entity's detail panel.
    fn show_more_info(&self, entity_id: &str) -> Result<(), HostError>;
}
