// main.rs
mod commands;
mod config;
mod devices;
mod error;
mod events;
mod panel;
mod shell;
mod utils;

use shell::Shell;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = config::Settings::new()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let filter = EnvFilter::try_new(&settings.log.filter)
        .map_err(|e| anyhow::anyhow!("Invalid log filter {:?}: {}", settings.log.filter, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), settings.panel.title);
    shell
        .run()
        .map_err(|e| anyhow::anyhow!("Console error: {}", e))?;

    tracing::info!("Control panel closed");
    Ok(())
}
