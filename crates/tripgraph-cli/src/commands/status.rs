//! Status command: show graph counts.

use anyhow::Result;
use colored::Colorize;

use tripgraph_core::GraphConfig;
use tripgraph_graph::GraphClient;

pub async fn execute() -> Result<()> {
    let config = GraphConfig::from_env();
    let client = GraphClient::connect(&config).await?;

    let counts = client.get_counts().await?;

    println!("{}", "Trip Graph Status".bold());
    println!("{}", "─".repeat(40));
    println!("  Locations: {}", counts.locations.to_string().cyan());
    println!("  Trips:     {}", counts.trips.to_string().cyan());
    println!("{}", "─".repeat(40));

    client.close();
    Ok(())
}
