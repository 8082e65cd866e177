#![forbid(unsafe_code)]

mod config;
mod constants;
mod feature;
mod features;
mod gui;
mod host;
mod plugin;

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::Store;

/// Toggle panel for frame-driven hosts, shown over a demo scene
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the panel visible
    #[arg(long)]
    show_panel: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let store = match args.config {
        Some(path) => Store::new(path),
        None => Store::at_default_path(),
    };
    info!(version = env!("CARGO_PKG_VERSION"), "modpanel starting");

    gui::run_gui(store, args.show_panel)?;
    Ok(())
}
