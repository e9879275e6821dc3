//! Geographic allow-list: the Bronx zone set.

/// TLC taxi zone IDs belonging to the Bronx. Ingestion is restricted to
/// trips whose pickup AND dropoff both fall inside this set.
pub const BRONX_ZONES: [i64; 43] = [
    3, 18, 20, 31, 32, 46, 47, 51, 58, 59, 60, 69, 78, 81, 94, 119, 126, 136, 147, 159, 167, 168,
    169, 174, 182, 183, 184, 185, 199, 200, 208, 212, 213, 220, 235, 240, 241, 242, 247, 248, 250,
    254, 259,
];

/// Whether a zone ID belongs to the Bronx set.
pub fn is_allowed_zone(zone_id: i64) -> bool {
    BRONX_ZONES.contains(&zone_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_set_size() {
        assert_eq!(BRONX_ZONES.len(), 43);
    }

    #[test]
    fn test_membership() {
        assert!(is_allowed_zone(3));
        assert!(is_allowed_zone(259));
        assert!(!is_allowed_zone(999));
        assert!(!is_allowed_zone(4));
        assert!(!is_allowed_zone(0));
    }
}
