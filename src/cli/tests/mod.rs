//! Unit tests for CLI module
//!
//! Runs commands against configuration and host files in a temp dir.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::PathBuf};

use clap::Parser;
use tempfile::TempDir;

use crate::{
    actions::DispatchOutcome,
    cli::{
        Cli, CliError, Command, Preview, execute,
        formatting::{format_bar, format_host_call, format_outcome},
    },
    config::ActionKind,
    host::offline::HostCall,
    render::{ItemClasses, ItemShape, RenderedBar, RenderedItem},
};

const CONFIG: &str = r#"
timeFormat = "none"
dateFormat = "none"

[[items]]
type = "icon"
icon = "mdi:home"
selected = true
action = "navigate"
navigation_path = "/lovelace/0"

[[items]]
text = "Hello {{ user }}"

[[items]]
text = "Fan"
action = "toggle"
entity = "switch.fan"
"#;

const HOST: &str = r#"{ "user": "Ada", "states": { "switch.fan": "off" } }"#;

fn fixture() -> (TempDir, Preview) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("navbar.toml");
    let host = dir.path().join("host.json");
    fs::write(&config, CONFIG).unwrap();
    fs::write(&host, HOST).unwrap();

    let preview = Preview {
        config,
        host: Some(host),
    };
    (dir, preview)
}

#[test]
fn render_lists_visible_items() {
    let (_dir, preview) = fixture();

    let output = execute(&Command::Render(preview)).unwrap();

    assert!(output.contains("[0] icon [mdi:home]"));
    assert!(output.contains("[1] text Hello Ada"));
    assert!(output.contains("[2] text Fan"));
    assert!(output.contains("menu-item selected hoverable"));
}

#[test]
fn render_without_host_file_uses_empty_snapshot() {
    let (_dir, mut preview) = fixture();
    preview.host = None;

    let output = execute(&Command::Render(preview)).unwrap();

    assert!(output.contains("Hello unknown user"));
}

#[test]
fn click_reports_host_calls() {
    let (_dir, preview) = fixture();

    let output = execute(&Command::Click { preview, index: 0 }).unwrap();

    assert!(output.contains("navigate dispatched"));
    assert!(output.contains("push-location /lovelace/0"));
    assert!(output.contains("location-changed"));
}

#[test]
fn click_on_inert_item_warns_about_no_calls() {
    let (_dir, preview) = fixture();

    let output = execute(&Command::Click { preview, index: 1 }).unwrap();

    assert!(output.contains("item has no action"));
    assert!(output.contains("host received no calls"));
}

#[test]
fn click_out_of_range_is_rejected() {
    let (_dir, preview) = fixture();

    let error = execute(&Command::Click { preview, index: 7 }).unwrap_err();

    assert!(matches!(error, CliError::InvalidArguments(_)));
    assert!(error.to_string().contains("out of range"));
}

#[test]
fn missing_config_file_is_an_error() {
    let preview = Preview {
        config: PathBuf::from("/nonexistent/navbar.toml"),
        host: None,
    };

    let error = execute(&Command::Render(preview)).unwrap_err();
    assert!(matches!(error, CliError::Navbar(_)));
}

#[test]
fn json_config_files_are_accepted() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("navbar.json");
    fs::write(&config, r#"{ "items": [{ "type": "icon", "icon": "mdi:cog" }] }"#).unwrap();

    let output = execute(&Command::Render(Preview { config, host: None })).unwrap();
    assert!(output.contains("[0] icon [mdi:cog]"));
}

#[test]
fn stub_and_schema_print_json() {
    let stub: serde_json::Value = serde_json::from_str(&execute(&Command::Stub).unwrap()).unwrap();
    assert_eq!(stub["items"].as_array().map(Vec::len), Some(4));

    let schema: serde_json::Value =
        serde_json::from_str(&execute(&Command::Schema).unwrap()).unwrap();
    assert!(schema["properties"]["items"].is_object());
    assert!(schema["properties"]["size"].is_object());
}

#[test]
fn cli_parses_click_arguments() {
    let cli = Cli::parse_from([
        "simple-navbar",
        "click",
        "--config",
        "navbar.toml",
        "--index",
        "2",
        "--log-dir",
        "/tmp/logs",
    ]);

    assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
    let Command::Click { preview, index } = cli.command else {
        panic!("expected click command");
    };
    assert_eq!(index, 2);
    assert_eq!(preview.config, PathBuf::from("navbar.toml"));
    assert_eq!(preview.host, None);
}

#[test]
fn format_bar_marks_empty_bars() {
    let bar = RenderedBar {
        icon_size: "32px".to_string(),
        menu_style: "background:white;".to_string(),
        items: Vec::new(),
    };

    assert!(format_bar(&bar).contains("(no visible items)"));
}

#[test]
fn format_bar_shows_index_shape_and_style() {
    let bar = RenderedBar {
        icon_size: "32px".to_string(),
        menu_style: String::new(),
        items: vec![RenderedItem {
            index: 4,
            shape: ItemShape::Label {
                icon: None,
                text: "14:30".to_string(),
                spacing: "20px".to_string(),
            },
            classes: ItemClasses::HOVERABLE,
            style: "color:grey; cursor:pointer;".to_string(),
        }],
    };

    let output = format_bar(&bar);
    assert!(output.contains("[4] label 14:30"));
    assert!(output.contains("menu-item hoverable"));
    assert!(output.contains("cursor:pointer;"));
}

#[test]
fn format_outcome_and_host_calls() {
    assert!(format_outcome(&DispatchOutcome::Dispatched(ActionKind::MoreInfo)).contains("more-info dispatched"));
    assert_eq!(
        format_host_call(&HostCall::OpenBrowsingContext {
            url: "https://example.com".to_string(),
            target: "_blank".to_string(),
        }),
        "open https://example.com (_blank)"
    );
}
