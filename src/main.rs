//! Binary entrypoint for the switch-frame display.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "switch-frame", about = "GPIO-switched photo display")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the slideshow dwell time (ms)
    #[arg(long, value_name = "MILLIS")]
    slide_ms: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("switch_frame={}", level).parse().unwrap())
        .add_directive("wgpu=warn".parse().unwrap())
        .add_directive("winit=warn".parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = switch_frame::config::Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;
    if let Some(ms) = cli.slide_ms {
        cfg.slide_interval = Duration::from_millis(ms.max(1));
    }

    let catalog = switch_frame::catalog::build(&cfg.photo_library_path, &cfg.fixed_image_name)
        .with_context(|| format!("cataloging {}", cfg.photo_library_path.display()))?;
    info!(
        fixed = %catalog.fixed_image.display(),
        sequence = catalog.sequence_images.len(),
        "catalog ready"
    );

    switch_frame::app::run(cfg, catalog)
}
