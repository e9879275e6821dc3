//! # Tripgraph Graph
//!
//! Neo4j integration: connection lifecycle, upsert queries, and the per-row
//! transactional loader that turns cleaned trips into Location nodes and
//! TRIP relationships.

pub mod client;
pub mod loader;
pub mod queries;

pub use client::{GraphClient, GraphCounts};
pub use loader::{load_trips, LoadResult};
