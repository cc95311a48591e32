mod commands;
mod render;

use clap::{Parser, Subcommand};
use storefinder_client::LocationsClient;
use storefinder_store::{DataSourceRepository, LocationStore};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefinder")]
#[command(about = "Browse store locations from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load locations page by page and print the resulting list
    List {
        /// Maximum number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Only show locations whose name contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Mark the location with this id as selected
        #[arg(long)]
        select: Option<String>,

        /// Print the final state as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Load every page while printing state changes as they are observed
    ///
    /// Snapshots published in quick succession are coalesced; only the
    /// latest one at each wake-up is printed.
    Watch {
        /// Maximum number of pages to load
        #[arg(long, default_value_t = u32::MAX)]
        pages: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = storefinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let client = LocationsClient::from_app_config(&config)?;
    let store = LocationStore::new(DataSourceRepository::new(client));

    match cli.command {
        Commands::List {
            pages,
            search,
            select,
            json,
        } => {
            commands::list(
                &store,
                &commands::ListOptions {
                    pages,
                    search,
                    select,
                    json,
                },
            )
            .await
        }
        Commands::Watch { pages } => {
            commands::watch(&store, pages).await;
            Ok(())
        }
    }
}
