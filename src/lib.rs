//! Simple Navbar - configurable navigation bar for smart-home dashboards.
//!
//! A bar is a list of items (labels, icons, text) whose strings may embed
//! the live date, time, user name or entity states, and whose clicks
//! dispatch one of five actions against the host dashboard. The main
//! pieces are:
//!
//! - Configuration normalization with structured warnings
//! - `{{ token }}` template substitution
//! - A change-only clock refreshed by a single owned task
//! - Typed action dispatch with per-item error isolation
//!
//! # Quick Start
//!
//! Hosts embedding the bar install logging once with
//! [`tracing_config::init`], then drive a [`navbar::Navbar`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use simple_navbar::{
//!     host::offline::{HostSnapshot, OfflineHost},
//!     navbar::Navbar,
//!     tracing_config,
//! };
//!
//! tracing_config::init()?;
//!
//! let host = Arc::new(OfflineHost::new(HostSnapshot::default()));
//! let mut navbar = Navbar::new(host);
//! navbar.set_config(&json!({ "items": [{ "text": "{{ time }}" }] }))?;
//!
//! for item in navbar.render().items {
//!     println!("{}", item.shape);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Click action dispatch.
pub mod actions;

/// Command-line preview tool.
pub mod cli;

/// Clock formatting and scheduling.
pub mod clock;

/// Reactive primitives.
pub mod common;

/// Configuration schema, normalization and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Host dashboard boundary.
pub mod host;

/// The navbar component.
pub mod navbar;

/// Item rendering.
pub mod render;

/// Template substitution.
pub mod template;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{NavbarError, Result};
