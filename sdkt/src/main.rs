//! Sdkt CLI - inspect the enum table of a runtime type registry.
//!
//! This is the main entry point for the sdkt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::CommandDescription;
use commands::{run_enums, run_stats, EnumsArgs, StatsArgs};
use config::Config;
use error::{Result, SdktError};

/// Sdkt - enum table inspector
///
/// Sdkt reads a registry snapshot, builds the enum table an SDK emitter
/// would consume and reports it.
#[derive(Parser, Debug)]
#[command(name = "sdkt")]
#[command(author = "Sdkgen Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the enum table built from a registry snapshot", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SDKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SDKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SDKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sdkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = commands::enums::EnumsCommand::description(),
        long_about = commands::enums::EnumsCommand::help()
    )]
    Enums(EnumsCommand),

    #[command(
        about = commands::stats::StatsCommand::description(),
        long_about = commands::stats::StatsCommand::help()
    )]
    Stats(StatsCommand),
}

/// Arguments for the enums subcommand.
#[derive(Parser, Debug)]
struct EnumsCommand {
    /// Registry snapshot (JSON)
    snapshot: PathBuf,

    /// Output format (text, json; default: from config)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only report the enum with this name
    #[arg(long)]
    only: Option<String>,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommand {
    /// Registry snapshot (JSON)
    snapshot: PathBuf,

    /// Output format (text, json; default: from config)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Main entry point for the sdkt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so reports written to stdout stay machine readable.
/// `RUST_LOG` overrides the level picked by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SdktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Enums(args) => run_enums(EnumsArgs {
            snapshot: args.snapshot,
            format: args.format,
            output: args.output,
            only: args.only,
            config,
        }),
        Commands::Stats(args) => run_stats(StatsArgs {
            snapshot: args.snapshot,
            format: args.format,
            config,
        }),
    }
}
