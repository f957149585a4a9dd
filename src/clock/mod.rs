//! Clock strings and the task that keeps them current.
//!
//! [`format_clock`] is the pure formatting step; [`ClockTicker`] owns the
//! recurring task that feeds it. The component stores the result in a
//! change-only [`Property`](crate::common::Property) so an unchanged tick
//! never triggers a render.

mod format;
mod pattern;
mod ticker;


pub use format::{ClockSettings, WRONG_DATE_FORMAT, WRONG_TIME_FORMAT, format_clock};
pub use pattern::{resolve_locale, to_strftime};
pub use ticker::ClockTicker;

use thiserror::Error;

/// Current formatted date and time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Formatted date, empty when suppressed
    pub date: String,
    /// Formatted time, empty when suppressed
    pub time: String,
}

/// Errors from clock scheduling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// No tokio runtime is available to host the refresh task
    #[error("clock ticker requires a tokio runtime")]
    NoRuntime,
}
