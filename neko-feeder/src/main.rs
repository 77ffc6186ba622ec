//! neko-feeder - karaoke file name feeder
//!
//! Scans a karaoke directory, extracts song metadata from the file names
//! and writes the catalog representations as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use neko_common::config::{self, ENV_SCAN_DIRECTORY};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use neko_feeder::services::feeder::write_json;
use neko_feeder::Feeder;

/// Extract karaoke metadata from file names
#[derive(Debug, Parser)]
#[command(name = "neko-feeder", version, about)]
struct Args {
    /// Directory to scan (default: $NEKO_FEEDER_DIRECTORY, then config, then current directory)
    directory: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "NEKO_FEEDER_CONFIG")]
    config: Option<PathBuf>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (overrides RUST_LOG and the config file)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = config::config_file_path(args.config.as_deref());
    let toml_config = config::load_or_default(config_path.as_deref())?;

    // Initialize tracing: CLI level, then RUST_LOG, then config file
    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&toml_config.logging.level))
            .with_context(|| format!("Invalid log level: {}", toml_config.logging.level))?,
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting neko-feeder");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) if path.exists() => info!("Config: {}", path.display()),
        _ => info!("Config: defaults"),
    }

    let root = config::resolve_scan_directory(
        args.directory.as_deref(),
        ENV_SCAN_DIRECTORY,
        &toml_config,
    );
    info!("Scanning: {}", root.display());

    let feeder = Feeder::new(&toml_config.subdirectories);
    let report = feeder
        .run(&root)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    let output = args.output.as_deref().or(toml_config.output.as_deref());
    write_json(&report.songs, output).context("Failed to write representations")?;

    info!(
        "{} songs: {} parsed, {} with default values",
        report.songs.len(),
        report.parsed,
        report.unparsed
    );

    Ok(())
}
