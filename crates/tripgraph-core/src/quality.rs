//! Quality-filter policy constants.

/// Minimum trip distance, exclusive. A trip at exactly this value is dropped.
pub const MIN_TRIP_DISTANCE: f64 = 0.1;

/// Minimum fare amount, exclusive. A trip at exactly this value is dropped.
pub const MIN_FARE_AMOUNT: f64 = 2.5;

/// Strict quality predicate: distance and fare must both exceed their floors.
pub fn passes_quality(distance: f64, fare: f64) -> bool {
    distance > MIN_TRIP_DISTANCE && fare > MIN_FARE_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_boundaries() {
        // Boundary values are dropped, not kept.
        assert!(!passes_quality(0.1, 9.0));
        assert!(!passes_quality(1.2, 2.5));
        assert!(!passes_quality(0.1, 2.5));
    }

    #[test]
    fn test_above_thresholds() {
        assert!(passes_quality(0.11, 2.51));
        assert!(passes_quality(1.2, 9.0));
    }

    #[test]
    fn test_below_thresholds() {
        assert!(!passes_quality(0.0, 9.0));
        assert!(!passes_quality(-1.0, 9.0));
        assert!(!passes_quality(1.2, 0.0));
    }
}
