//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod load;
pub mod status;

/// Tripgraph - taxi-trip parquet to Neo4j loader
#[derive(Parser)]
#[command(name = "tripgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the trip file into the graph (the default when no command is given)
    Load(load::LoadArgs),

    /// Show Location node and TRIP relationship counts
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        // The deployed process runs with no arguments, which means `load`
        // with the baked-in deployment defaults.
        match self.command.unwrap_or_else(|| Commands::Load(load::LoadArgs::default())) {
            Commands::Load(args) => load::execute(args).await,
            Commands::Status => status::execute().await,
        }
    }
}
