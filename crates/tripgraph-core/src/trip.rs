//! Trip record domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{TripError, TripResult};

/// Textual timestamp layout used by the input file. No fallback parsing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One cleaned taxi trip, ready to be loaded into the graph.
///
/// Exists only in memory during a single pipeline run; the graph database
/// owns the persisted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub pickup_dt: NaiveDateTime,
    pub dropoff_dt: NaiveDateTime,
    pub pickup_zone: i64,
    pub dropoff_zone: i64,
    pub distance: f64,
    pub fare: f64,
}

/// Parse a timestamp cell from the fixed `YYYY-MM-DD HH:MM:SS` layout.
pub fn parse_timestamp(value: &str) -> TripResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| TripError::format(format!("'{value}' (expected YYYY-MM-DD HH:MM:SS)")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_round_trip() {
        let dt = parse_timestamp("2022-03-01 08:15:00").unwrap();
        assert_eq!(dt.format(TIMESTAMP_FORMAT).to_string(), "2022-03-01 08:15:00");
    }

    #[test]
    fn test_timestamp_rejects_other_layouts() {
        assert!(matches!(parse_timestamp("2022-03-01T08:15:00"), Err(TripError::Format(_))));
        assert!(matches!(parse_timestamp("03/01/2022 08:15"), Err(TripError::Format(_))));
        assert!(matches!(parse_timestamp(""), Err(TripError::Format(_))));
    }
}
