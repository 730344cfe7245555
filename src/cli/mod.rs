//! Command-line interface for rust-template
//!
//! Provides `run`, `configs` and `celsius` subcommands.

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::config::ConfigCatalog;

mod celsius;
mod configs;
mod run;

/// Project template: validated temperatures and camera configuration loading
#[derive(Parser)]
#[command(name = "rust-template")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to INFO)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log the parameters, convert a temperature and describe a camera config
    Run(run::RunArgs),

    /// List the bundled camera configurations
    Configs(configs::ConfigsArgs),

    /// Convert a Celsius temperature to Fahrenheit
    Celsius(celsius::CelsiusArgs),
}

pub fn run() -> Result<()> {
    // Installed before parsing: building `--config` scans the catalog, which may warn.
    let filter_handle = init_tracing();
    let cli = Cli::parse();

    if cli.verbose {
        let _ = filter_handle.reload(log_filter(Level::INFO));
    }

    match cli.command {
        Commands::Run(args) => run::run(args, cli.verbose),
        Commands::Configs(args) => configs::run(args),
        Commands::Celsius(args) => celsius::run(args),
    }
}

/// RUST_LOG in the environment always takes precedence; `level` is the fallback.
fn log_filter(level: Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(log_filter(Level::WARN));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
    handle
}

/// Restrict a `--config` value to the names in the bundled catalog.
fn config_name_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(ConfigCatalog::bundled().list_names())
}
