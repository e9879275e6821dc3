//! # Tripgraph Ingest
//!
//! Reads the taxi-trip parquet file and turns it into cleaned `TripRecord`s:
//! column projection, Bronx allow-list filter, quality filter, timestamp
//! normalization.

pub mod read;
pub mod transform;

use std::path::Path;

use tripgraph_core::{TripRecord, TripResult};

pub use read::read_trips;
pub use transform::transform;

/// Read `path` and run the full transform, yielding rows ready to load.
pub fn load_file(path: &Path) -> TripResult<Vec<TripRecord>> {
    let df = read::read_trips(path)?;
    transform::transform(&df)
}
