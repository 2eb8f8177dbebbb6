mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use mapscale_core::config::AppConfig;
use mapscale_core::lifecycle;
use mapscale_core::GridsetRegistry;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    lifecycle::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let registry = GridsetRegistry::from_config(&config)?;
    tracing::debug!("Default gridset: {}", registry.default_gridset());

    match cli.command {
        Commands::Levels { gridset, from, to } => commands::levels(&registry, gridset, from, to)?,
        Commands::Resolve {
            gridset,
            zoom,
            scale,
            json,
        } => commands::resolve(&registry, gridset, zoom, scale, json)?,
        Commands::Validate { scales, initial } => commands::validate(scales, initial)?,
        Commands::Gridsets => commands::gridsets(&registry)?,
    }

    Ok(())
}
