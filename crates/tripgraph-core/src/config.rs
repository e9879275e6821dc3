//! Deployment configuration for the loader.
//!
//! Every value has a baked-in deployment default so the process can run with
//! no arguments; environment variables and CLI flags layer on top.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Configuration for connecting to the graph database.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "neo4j://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "project1phase1".to_string(),
        }
    }
}

impl GraphConfig {
    /// Build a config from `NEO4J_URI`, `NEO4J_USER` and `NEO4J_PASSWORD`,
    /// falling back to the deployment defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// Match key used when upserting a TRIP edge.
///
/// The two load variants differ in how repeated trips between the same pair
/// of locations collapse, so the choice is a configuration knob rather than
/// a fixed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeMatch {
    /// Match on endpoints plus distance, fare and both timestamps: trips
    /// identical in every property collapse into one edge, any difference
    /// creates a parallel edge.
    #[default]
    FullProperties,
    /// Match on endpoints only: one edge per ordered location pair, whose
    /// properties are overwritten by the latest trip loaded.
    EndpointsOnly,
}

impl FromStr for EdgeMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-properties" => Ok(Self::FullProperties),
            "endpoints-only" => Ok(Self::EndpointsOnly),
            other => Err(format!(
                "unknown edge match mode '{other}' (expected 'full-properties' or 'endpoints-only')"
            )),
        }
    }
}

/// Configuration for one load run, including the retry budget.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub input_path: PathBuf,
    pub attempts: u32,
    pub retry_delay: Duration,
    pub edge_match: EdgeMatch,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("yellow_tripdata_2022-03.parquet"),
            attempts: 10,
            retry_delay: Duration::from_secs(10),
            edge_match: EdgeMatch::default(),
        }
    }
}

impl LoadConfig {
    /// Apply `TRIPGRAPH_INPUT` and `TRIPGRAPH_EDGE_MATCH` overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("TRIPGRAPH_INPUT") {
            config.input_path = PathBuf::from(path);
        }
        if let Ok(mode) = std::env::var("TRIPGRAPH_EDGE_MATCH") {
            if let Ok(parsed) = mode.parse() {
                config.edge_match = parsed;
            }
        }
        config
    }
}
