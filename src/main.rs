//! simple-navbar - preview a navigation bar configuration from the terminal.

use std::{error::Error, process};

use clap::Parser;
use simple_navbar::{
    cli::{self, Cli, formatting::format_error},
    tracing_config,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let _guard = match &args.log_dir {
        Some(dir) => Some(tracing_config::init_with_file(dir)?),
        None => {
            tracing_config::init_cli_mode()?;
            None
        }
    };

    match cli::execute(&args.command) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
