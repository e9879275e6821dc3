//! Load command: connect, ingest, load — wrapped in the fixed retry loop.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::warn;

use tripgraph_core::{EdgeMatch, GraphConfig, LoadConfig, TripResult};
use tripgraph_graph::{GraphClient, LoadResult};

#[derive(Args, Default)]
pub struct LoadArgs {
    /// Path to the trip parquet file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Neo4j URI
    #[arg(long)]
    pub uri: Option<String>,

    /// Neo4j username
    #[arg(long)]
    pub user: Option<String>,

    /// Neo4j password
    #[arg(long)]
    pub password: Option<String>,

    /// Connection attempts before giving up
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Seconds to wait between attempts
    #[arg(long)]
    pub retry_delay: Option<u64>,

    /// TRIP edge match key: 'full-properties' or 'endpoints-only'
    #[arg(long)]
    pub edge_match: Option<EdgeMatch>,
}

pub async fn execute(args: LoadArgs) -> Result<()> {
    // Flags override env, env overrides the deployment defaults.
    let mut graph_config = GraphConfig::from_env();
    if let Some(uri) = args.uri {
        graph_config.uri = uri;
    }
    if let Some(user) = args.user {
        graph_config.user = user;
    }
    if let Some(password) = args.password {
        graph_config.password = password;
    }

    let mut load_config = LoadConfig::from_env();
    if let Some(file) = args.file {
        load_config.input_path = file;
    }
    if let Some(attempts) = args.attempts {
        load_config.attempts = attempts;
    }
    if let Some(secs) = args.retry_delay {
        load_config.retry_delay = Duration::from_secs(secs);
    }
    if let Some(edge_match) = args.edge_match {
        load_config.edge_match = edge_match;
    }

    println!(
        "{}",
        format!("Loading {} into the trip graph...", load_config.input_path.display()).bold()
    );

    let result = run_with_retry(load_config.attempts, load_config.retry_delay, || {
        load_once(&graph_config, &load_config)
    })
    .await;

    match result {
        Ok(loaded) => {
            println!("\n{}", "Load complete:".green().bold());
            println!("  Rows loaded:   {}", loaded.rows_loaded);
            println!("  Node upserts:  {}", loaded.node_upserts);
            println!("  Edge upserts:  {}", loaded.edge_upserts);
            Ok(())
        }
        Err(e) => {
            println!("\n{} {}", "Load failed:".red().bold(), e);
            Err(e.into())
        }
    }
}

/// One full attempt: connect, read and transform the whole file, load every
/// row, close. A failure anywhere discards all in-memory progress; the next
/// attempt starts from scratch.
async fn load_once(graph_config: &GraphConfig, load_config: &LoadConfig) -> TripResult<LoadResult> {
    let client = GraphClient::connect(graph_config).await?;
    let trips = tripgraph_ingest::load_file(&load_config.input_path)?;
    let result = tripgraph_graph::load_trips(&client, &trips, load_config.edge_match).await?;
    client.close();
    Ok(result)
}

/// Bounded retry with a fixed delay: no backoff growth, no jitter, every
/// error kind treated alike. Reports each failed attempt to stdout and
/// returns the last error once the budget is spent.
pub async fn run_with_retry<T, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> TripResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = TripResult<T>>,
{
    let mut last_err = None;
    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                println!("(Attempt {attempt}/{attempts}) Error: {e}");
                warn!(attempt, attempts, error = %e, "Load attempt failed");
                last_err = Some(e);
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    Err(last_err.unwrap_or_else(|| tripgraph_core::TripError::write("retry budget is zero")))
}
