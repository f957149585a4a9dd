use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::{Mutex, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::ConfigError;

use super::{Host, HostError, ServiceCall};

/// Point-in-time view of host state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSnapshot {
    /// Current user's display name
    pub user: Option<String>,
    /// Host time zone
    pub time_zone: Option<String>,
    /// Host UI language
    pub language: Option<String>,
    /// Entity id to state value
    pub states: HashMap<String, String>,
}

/// An effect the navbar asked the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// `call_service`
    CallService(ServiceCall),
    /// `push_location`
    PushLocation(String),
    /// `notify_location_changed`
    LocationChanged,
    /// `open_browsing_context`
    OpenBrowsingContext {
        /// Address opened
        url: String,
        /// Browsing context name
        target: String,
    },
    /// `show_more_info`
    MoreInfo {
        /// Entity shown
        entity_id: String,
    },
}

/// Host backed by a static snapshot that records every effect.
///
/// Used to preview configurations without a running dashboard.
#[derive(Debug, Default)]
pub struct OfflineHost {
    snapshot: RwLock<HostSnapshot>,
    calls: Mutex<Vec<HostCall>>,
}

impl OfflineHost {
    /// Creates a host serving the given snapshot.
    pub fn new(snapshot: HostSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Loads a snapshot from a `.json` or `.toml` file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let document = crate::config::read_document(path, &content)?;
        let snapshot = serde_json::from_value(document).map_err(|e| ConfigError::Malformed {
            details: e.to_string(),
        })?;

        Ok(Self::new(snapshot))
    }

    /// Updates one entity's state.
    pub fn set_state(&self, entity_id: &str, state: &str) {
        let mut snapshot = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        snapshot
            .states
            .insert(entity_id.to_string(), state.to_string());
    }

    /// Effects recorded so far, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        match self.calls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&HostSnapshot) -> T) -> T {
        match self.snapshot.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn record(&self, call: HostCall) -> Result<(), HostError> {
        info!(?call, "Host effect");
        let mut calls = self
            .calls
            .lock()
            .map_err(|_| HostError::Unavailable("call log poisoned".to_string()))?;
        calls.push(call);
        Ok(())
    }
}

impl Host for OfflineHost {
    fn user_name(&self) -> Option<String> {
        self.read(|s| s.user.clone())
    }

    fn entity_state(&self, entity_id: &str) -> Option<String> {
        self.read(|s| s.states.get(entity_id).cloned())
    }

    fn time_zone(&self) -> Option<String> {
        self.read(|s| s.time_zone.clone())
    }

    fn language(&self) -> Option<String> {
        self.read(|s| s.language.clone())
    }

    fn call_service(&self, call: ServiceCall) -> Result<(), HostError> {
        self.record(HostCall::CallService(call))
    }

    fn push_location(&self, path: &str) -> Result<(), HostError> {
        self.record(HostCall::PushLocation(path.to_string()))
    }

    fn notify_location_changed(&self) -> Result<(), HostError> {
        self.record(HostCall::LocationChanged)
    }

    fn open_browsing_context(&self, url: &str, target: &str) -> Result<(), HostError> {
        self.record(HostCall::OpenBrowsingContext {
            url: url.to_string(),
            target: target.to_string(),
        })
    }

    fn show_more_info(&self, entity_id: &str) -> Result<(), HostError> {
        self.record(HostCall::MoreInfo {
            entity_id: entity_id.to_string(),
        })
    }
}
