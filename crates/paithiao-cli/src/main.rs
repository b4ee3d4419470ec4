use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paithiao_core::Category;
use paithiao_store::StoreClient;

mod screens;

#[derive(Debug, Parser)]
#[command(name = "paithiao")]
#[command(about = "Categorized tourism guide backed by the remote directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the available categories
    Categories,
    /// List all places in a category, ordered by name
    List {
        /// tourist, restaurant, cafe, temple, or event
        category: Category,
    },
    /// Show one place with its map preview and deep links
    Show {
        /// tourist, restaurant, cafe, temple, or event
        category: Category,
        /// Row identifier in the category's table
        id: String,
    },
}

/// Loads configuration, wires up tracing, and builds the store client.
/// Only the subcommands that talk to the store pay this cost.
fn init_store() -> anyhow::Result<StoreClient> {
    let config = paithiao_core::load_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(StoreClient::new(&config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => screens::run_categories(),
        Commands::List { category } => screens::run_list(&init_store()?, category).await,
        Commands::Show { category, id } => screens::run_show(&init_store()?, category, &id).await,
    }

    Ok(())
}
