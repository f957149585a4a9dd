//! Command-line interface for previewing navbar configurations.
//!
//! Every command runs against an [`OfflineHost`], so a configuration can be
//! rendered and its actions exercised without a running dashboard.

pub mod formatting;
mod types;

#[cfg(test)]
mod tests;

pub use types::{CliError, CommandResult};

use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::{
    config,
    host::offline::{HostSnapshot, OfflineHost},
    navbar::Navbar,
};

use formatting::{format_bar, format_host_call, format_outcome, format_warning};

/// Preview a navigation bar configuration offline.
#[derive(Debug, Parser)]
#[command(name = "simple-navbar", version, about)]
pub struct Cli {
    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every item of a configuration
    Render(Preview),

    /// Dispatch one item's action and show what the host received
    Click {
        /// Configuration and host inputs
        #[command(flatten)]
        preview: Preview,

        /// Index of the item in the configured list
        #[arg(long)]
        index: usize,
    },

    /// Print the example configuration
    Stub,

    /// Print the configuration JSON Schema
    Schema,
}

/// Inputs shared by commands that build a bar.
#[derive(Debug, Args)]
pub struct Preview {
    /// Configuration file (.toml or .json)
    #[arg(long)]
    pub config: PathBuf,

    /// Host snapshot file (.toml or .json) with user, states, zone, language
    #[arg(long)]
    pub host: Option<PathBuf>,
}

impl Preview {
    fn build(&self) -> Result<(Navbar<OfflineHost>, Arc<OfflineHost>), CliError> {
        let host = match &self.host {
            Some(path) => OfflineHost::load(path).map_err(crate::NavbarError::from)?,
            None => OfflineHost::new(HostSnapshot::default()),
        };
        let host = Arc::new(host);

        let raw = config::load_file(&self.config).map_err(crate::NavbarError::from)?;
        let mut navbar = Navbar::new(Arc::clone(&host));
        for warning in navbar.apply_config(raw)? {
            warn!(%warning, "Configuration defaulted");
        }

        Ok((navbar, host))
    }
}

/// Executes a parsed command and returns its output.
///
/// # Errors
/// Returns error if inputs cannot be loaded or the item index is invalid.
pub fn execute(command: &Command) -> CommandResult {
    match command {
        Command::Render(preview) => {
            let (navbar, _) = preview.build()?;
            Ok(format_bar(&navbar.render()))
        }
        Command::Click { preview, index } => {
            let (navbar, host) = preview.build()?;
            let count = navbar.config().items.len();
            if *index >= count {
                return Err(CliError::InvalidArguments(format!(
                    "item index {index} out of range, configuration has {count} items"
                )));
            }

            info!(index, "Dispatching item action");
            let outcome = navbar.click(*index);

            let mut lines = vec![format_outcome(&outcome)];
            let calls = host.calls();
            if calls.is_empty() {
                lines.push(format_warning("host received no calls"));
            }
            lines.extend(calls.iter().map(|call| format!("  {}", format_host_call(call))));
            Ok(lines.join("\n"))
        }
        Command::Stub => Ok(serde_json::to_string_pretty(&config::stub_config())?),
        Command::Schema => Ok(serde_json::to_string_pretty(&config::schema())?),
    }
}
