//! graphwalk - run classic graph searches over graphs described in files
//!
//! Breadth-first and depth-first traversal, hop distances and path queries
//! on unweighted graphs; Dijkstra and Bellman-Ford on weighted ones.

mod cli;
mod commands;

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::{ExitCode as WalkExitCode, WalkError};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `--format` is parsed; honor a JSON request anyway
            if argv_format_json {
                let walk_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        WalkError::UsageError(err.to_string())
                    }
                    _ => WalkError::Other(err.to_string()),
                };

                eprintln!("{}", walk_error.to_json());
                return ExitCode::from(walk_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e, cli.format == Some(OutputFormat::Json), cli.quiet),
    };
    let format = cli.format.unwrap_or(config.format);

    // --log-level beats --verbose, which beats the config file
    let log_level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => Some(level.as_str()),
        (None, true) => None,
        (None, false) => config.log_level.as_deref(),
    };
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, &config, format) {
        Ok(()) => ExitCode::from(WalkExitCode::Success as u8),
        Err(e) => report(&e, format == OutputFormat::Json, cli.quiet),
    }
}

fn load_config(path: Option<&Path>) -> Result<WalkConfig, WalkError> {
    match path {
        Some(path) => WalkConfig::load(path),
        None => Ok(WalkConfig::default()),
    }
}

fn report(error: &WalkError, json: bool, quiet: bool) -> ExitCode {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
