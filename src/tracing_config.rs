use std::{env, error::Error, io, path::Path};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting `pretty` (default) or `json` output.
pub const NAVBAR_LOG_FORMAT: &str = "NAVBAR_LOG_FORMAT";

const LOG_FILE_PREFIX: &str = "simple-navbar";
const DAYS_TO_KEEP: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var(NAVBAR_LOG_FORMAT) {
            Ok(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing for an embedding host
///
/// Uses RUST_LOG if set, otherwise "info". Output is pretty unless
/// NAVBAR_LOG_FORMAT is "json".
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init() -> Result<(), Box<dyn Error>> {
    let registry = tracing_subscriber::registry().with(filter_or("info"));

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_level(true))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_names(true),
            )
            .try_init()?,
    }

    Ok(())
}

/// Initialize tracing for CLI commands
///
/// Compact output on stderr, warnings and above unless RUST_LOG says
/// otherwise, so command output on stdout stays clean.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(filter_or("warn"))
        .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
        .try_init()?;

    Ok(())
}

/// Initialize tracing with file output
///
/// Compact output on stderr plus a daily rolling file under `log_dir`, both
/// at "info" unless RUST_LOG says otherwise. Keep the returned guard alive
/// until exit so buffered lines are flushed.
///
/// # Errors
/// Returns error if the log directory cannot be used or a global subscriber
/// is already installed
pub fn init_with_file(log_dir: &Path) -> Result<WorkerGuard, Box<dyn Error>> {
    let appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let registry = tracing_subscriber::registry()
        .with(filter_or("info"))
        .with(fmt::layer().compact().with_target(false).with_writer(io::stderr));

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(file_writer).with_ansi(false))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(guard)
}
