//! Common utilities shared by the clock and the component.

/// Reactive property with change-only notification
pub mod property;

pub use property::Property;
