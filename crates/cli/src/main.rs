//! Consumers CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! consumers-cli migrate
//!
//! # Seed the lookup tables from a YAML file
//! consumers-cli seed lookups --file crates/cli/seed/lookups.yaml
//!
//! # List every consumer
//! consumers-cli consumers list
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed lookups` - Seed currencies, languages, time zones, and country codes
//! - `consumers list` - List stored consumers

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "consumers-cli")]
#[command(author, version, about = "Consumers service CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed reference data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Inspect stored consumers
    Consumers {
        #[command(subcommand)]
        action: ConsumerAction,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed the lookup tables from a YAML file
    Lookups {
        /// Path to the YAML seed file
        #[arg(short, long, default_value = "crates/cli/seed/lookups.yaml")]
        file: String,
    },
}

#[derive(Subcommand)]
enum ConsumerAction {
    /// List every consumer, oldest first
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { target } => match target {
            SeedTarget::Lookups { file } => commands::seed::lookups(&file).await?,
        },
        Commands::Consumers { action } => match action {
            ConsumerAction::List => commands::consumers::list().await?,
        },
    }
    Ok(())
}
