//! Parquet input reading.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use tripgraph_core::{TripError, TripResult};

/// Load the parquet file at `path` into an in-memory frame.
///
/// The entire file is materialized before any write begins; there is no
/// streaming overlap with the load phase.
pub fn read_trips(path: &Path) -> TripResult<DataFrame> {
    let file = File::open(path)
        .map_err(|e| TripError::read(format!("{}: {e}", path.display())))?;

    let df = ParquetReader::new(file)
        .finish()
        .map_err(|e| TripError::read(format!("{}: {e}", path.display())))?;

    debug!(rows = df.height(), path = %path.display(), "Read parquet input");
    Ok(df)
}
