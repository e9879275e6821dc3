//! Projection, filtering and cleaning of raw trip frames.
//!
//! Mirrors the load order of the original dataset pipeline: project the six
//! columns, restrict both endpoints to the Bronx zone set, apply the strict
//! quality thresholds, then parse timestamps on the surviving rows.

use polars::prelude::*;
use tracing::info;

use tripgraph_core::quality::passes_quality;
use tripgraph_core::trip::parse_timestamp;
use tripgraph_core::zones::is_allowed_zone;
use tripgraph_core::{TripError, TripRecord, TripResult};

/// Pickup timestamp column name in the TLC yellow-taxi schema.
pub const COL_PICKUP_DT: &str = "tpep_pickup_datetime";
/// Dropoff timestamp column name.
pub const COL_DROPOFF_DT: &str = "tpep_dropoff_datetime";
/// Pickup zone ID column name.
pub const COL_PICKUP_ZONE: &str = "PULocationID";
/// Dropoff zone ID column name.
pub const COL_DROPOFF_ZONE: &str = "DOLocationID";
/// Trip distance column name.
pub const COL_DISTANCE: &str = "trip_distance";
/// Fare amount column name.
pub const COL_FARE: &str = "fare_amount";

/// Filter and clean a raw trip frame into loadable records, in input order.
///
/// Rows with a null in any projected column are dropped; a surviving row
/// with a malformed timestamp aborts the transform with a format error.
pub fn transform(df: &DataFrame) -> TripResult<Vec<TripRecord>> {
    let pickup_ts = str_column(df, COL_PICKUP_DT)?;
    let dropoff_ts = str_column(df, COL_DROPOFF_DT)?;
    let pickup_zones = int_column(df, COL_PICKUP_ZONE)?;
    let dropoff_zones = int_column(df, COL_DROPOFF_ZONE)?;
    let distances = float_column(df, COL_DISTANCE)?;
    let fares = float_column(df, COL_FARE)?;

    let mut records = Vec::new();
    for idx in 0..df.height() {
        let cells = (
            pickup_zones.get(idx),
            dropoff_zones.get(idx),
            distances.get(idx),
            fares.get(idx),
            pickup_ts.get(idx),
            dropoff_ts.get(idx),
        );
        let (Some(pickup_zone), Some(dropoff_zone), Some(distance), Some(fare), Some(pickup), Some(dropoff)) =
            cells
        else {
            continue;
        };

        if !is_allowed_zone(pickup_zone) || !is_allowed_zone(dropoff_zone) {
            continue;
        }
        if !passes_quality(distance, fare) {
            continue;
        }

        records.push(TripRecord {
            pickup_dt: parse_timestamp(pickup)?,
            dropoff_dt: parse_timestamp(dropoff)?,
            pickup_zone,
            dropoff_zone,
            distance,
            fare,
        });
    }

    info!(rows_in = df.height(), rows_out = records.len(), "Transformed trip frame");
    Ok(records)
}

fn str_column<'a>(df: &'a DataFrame, name: &str) -> TripResult<&'a StringChunked> {
    df.column(name)
        .map_err(|_| TripError::schema(name.to_string()))?
        .str()
        .map_err(|_| TripError::format(format!("column '{name}' is not text")))
}

fn int_column(df: &DataFrame, name: &str) -> TripResult<Int64Chunked> {
    let cast = df
        .column(name)
        .map_err(|_| TripError::schema(name.to_string()))?
        .cast(&DataType::Int64)
        .map_err(|_| TripError::schema(format!("column '{name}' is not integral")))?;
    let chunked = cast
        .i64()
        .map_err(|_| TripError::schema(format!("column '{name}' is not integral")))?;
    Ok(chunked.clone())
}

fn float_column(df: &DataFrame, name: &str) -> TripResult<Float64Chunked> {
    let cast = df
        .column(name)
        .map_err(|_| TripError::schema(name.to_string()))?
        .cast(&DataType::Float64)
        .map_err(|_| TripError::schema(format!("column '{name}' is not numeric")))?;
    let chunked = cast
        .f64()
        .map_err(|_| TripError::schema(format!("column '{name}' is not numeric")))?;
    Ok(chunked.clone())
}
