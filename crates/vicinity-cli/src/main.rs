//! Demo front end for the vicinity proximity core.
//!
//! Wires a positioning backend, the provider feed, and the nearby session
//! together the way an app shell would, and prints what the surfaces would
//! render.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod categories;
mod nearby;
mod position;
mod providers;
mod render;
mod watch;

#[derive(Debug, Parser)]
#[command(name = "vicinity-cli")]
#[command(about = "Nearby service providers from a device fix and a provider feed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Acquire one fix, fetch the provider list once, print it ranked
    Nearby(nearby::NearbyArgs),
    /// Run a live session and print every recomputed view
    Watch(watch::WatchArgs),
    /// Validate and print the service-category registry
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = vicinity_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Nearby(args) => nearby::run(&config, &args).await,
        Commands::Watch(args) => watch::run(&config, &args).await,
        Commands::Categories => categories::run(&config),
    }
}

#[cfg(test)]
mod tests;
