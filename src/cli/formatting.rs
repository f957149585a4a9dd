//! Formatting utilities for CLI output.
//!
//! Renders bars, dispatch outcomes and recorded host calls as styled
//! terminal text.

use std::fmt::Write;

use crate::{
    actions::DispatchOutcome,
    host::offline::HostCall,
    render::RenderedBar,
};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats success messages with green styling
pub fn format_success(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats warnings with yellow styling
pub fn format_warning(text: &str) -> String {
    format!("{}{}{}", Colors::YELLOW, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a rendered bar, one item per line.
///
/// Each line shows the item's index (its click target), its shape, its
/// class list and its resolved inline style.
pub fn format_bar(bar: &RenderedBar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_header("Navbar"));
    let _ = writeln!(
        out,
        "  {}",
        format_description(&format!("icon size {} | {}", bar.icon_size, bar.menu_style))
    );

    if bar.items.is_empty() {
        let _ = writeln!(out, "  {}", format_description("(no visible items)"));
    }

    for item in &bar.items {
        let _ = writeln!(
            out,
            "  [{}] {}  {}",
            item.index,
            item.shape,
            format_description(&item.classes.class_list())
        );
        let _ = writeln!(out, "      {}", format_description(&item.style));
    }

    out.trim_end().to_string()
}

/// Formats one dispatch outcome.
pub fn format_outcome(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Idle => format_description("item has no action"),
        DispatchOutcome::Dispatched(kind) => format_success(&format!("{kind} dispatched")),
        DispatchOutcome::Failed(e) => format_error(&e.to_string()),
    }
}

/// Formats a recorded host call.
pub fn format_host_call(call: &HostCall) -> String {
    match call {
        HostCall::CallService(call) => format!(
            "call-service {}.{} data={} target={}",
            call.domain,
            call.service,
            serde_json::Value::Object(call.data.clone()),
            serde_json::Value::Object(call.target.clone())
        ),
        HostCall::PushLocation(path) => format!("push-location {path}"),
        HostCall::LocationChanged => "location-changed".to_string(),
        HostCall::OpenBrowsingContext { url, target } => format!("open {url} ({target})"),
        HostCall::MoreInfo { entity_id } => format!("more-info {entity_id}"),
    }
}
