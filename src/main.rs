//! Mazegraph - observable graph searches from the command line
//!
//! Loads a weighted graph or a maze, runs breadth-first search, depth-first
//! search or Dijkstra, and prints what the algorithm reported along the way.

mod cli;
mod commands;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use mazegraph_core::config::AppConfig;
use mazegraph_core::error::{ExitCode as GraphExitCode, GraphError};
use mazegraph_core::format::OutputFormat;
use mazegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If JSON output was requested on the command
            // line or by the config file, emit a structured error envelope.
            if argv_output_format() == OutputFormat::Json {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let cwd = env::current_dir().unwrap_or_else(|_| ".".into());
    let config = match AppConfig::discover(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => return report_error(&cli, cli.format.unwrap_or_default(), &e),
    };
    let format = cli.format.unwrap_or(config.format);

    // Initialize structured logging
    let log_level = cli.log_level.as_deref().or(config.log_level.as_deref());
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report_error(&cli, format, &e),
    }
}

fn report_error(cli: &Cli, format: OutputFormat, error: &GraphError) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Output format for errors raised while clap parses the arguments.
///
/// A parseable `--format` wins; otherwise the config named by `--config`, or
/// the discovered `mazegraph.toml`, decides.
fn argv_output_format() -> OutputFormat {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Some(format) = argv_value(&args, "--format").and_then(|v| v.parse().ok()) {
        return format;
    }

    let explicit = argv_value(&args, "--config").map(PathBuf::from);
    let cwd = env::current_dir().unwrap_or_else(|_| ".".into());
    AppConfig::discover(explicit.as_deref(), &cwd)
        .map(|config| config.format)
        .unwrap_or_default()
}

/// Value of `flag` given as `flag value` or `flag=value`
fn argv_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().map(String::as_str);
        }
        if let Some(value) = arg
            .strip_prefix(flag)
            .and_then(|rest| rest.strip_prefix('='))
        {
            return Some(value);
        }
    }
    None
}
