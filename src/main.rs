//! Pretty Print - colorized progress output for unit-test runners
//!
//! CLI entry point: reads runner events as JSON lines on stdin and renders
//! them on stdout.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pretty_print::{ConsoleWriter, PrinterConfig, ReplaySession};

/// Colorized per-test progress for unit-test runners
///
/// Reads one JSON event per line from stdin (`suite`, `start`, `progress`,
/// `end`) and prints grouped, color-coded progress lines to stdout.
#[derive(Parser, Debug)]
#[command(name = "pretty-print", version, about)]
struct Cli {
    /// Path to a TOML file with color and duration threshold settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable ANSI colors (also disabled when NO_COLOR is set)
    #[arg(long)]
    no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load the config file if one was given, otherwise the defaults.
fn load_config(path: Option<&PathBuf>) -> Result<PrinterConfig> {
    path.map_or_else(
        || Ok(PrinterConfig::default()),
        |path| {
            PrinterConfig::from_path(path)
                .with_context(|| format!("Failed to load config from '{}'", path.display()))
        },
    )
}

/// Colors are on unless the config, `--no-color` or `NO_COLOR` turns them off.
const fn color_enabled(config_color: bool, no_color_flag: bool, no_color_env: bool) -> bool {
    config_color && !no_color_flag && !no_color_env
}

/// Diagnostics go to stderr so stdout carries only rendered output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let thresholds = config
        .duration_thresholds()
        .context("Invalid duration thresholds")?;
    let color = color_enabled(
        config.color,
        cli.no_color,
        std::env::var("NO_COLOR").is_ok(),
    );

    let writer = ConsoleWriter::new(io::stdout().lock(), color);
    let mut session = ReplaySession::with_thresholds(writer, thresholds);
    session
        .run(io::stdin().lock())
        .context("Failed to render runner events")
}
