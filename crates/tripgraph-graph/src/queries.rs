//! Cypher upsert queries for Location nodes and TRIP relationships.

use neo4rs::Query;

use tripgraph_core::{EdgeMatch, TripRecord};

/// Match-or-create a Location node keyed by its zone ID.
pub const MERGE_LOCATION: &str = "MERGE (loc:Location {name: $zone_id})";

/// Match-or-create a TRIP edge keyed by endpoints plus the full property
/// set. Identical trips collapse into one edge; a trip differing in any
/// property becomes a parallel edge between the same pair.
pub const MERGE_TRIP_FULL_PROPERTIES: &str = "MATCH (p:Location {name: $pickup_zone}), (d:Location {name: $dropoff_zone})
     MERGE (p)-[:TRIP {
         distance: $distance, fare: $fare,
         pickup_dt: $pickup_dt, dropoff_dt: $dropoff_dt
     }]->(d)";

/// Match-or-create a TRIP edge keyed on endpoints only; properties are
/// overwritten by the latest loaded trip.
pub const MERGE_TRIP_ENDPOINTS_ONLY: &str = "MATCH (p:Location {name: $pickup_zone}), (d:Location {name: $dropoff_zone})
     MERGE (p)-[t:TRIP]->(d)
     SET t.distance = $distance, t.fare = $fare,
         t.pickup_dt = $pickup_dt, t.dropoff_dt = $dropoff_dt";

/// Build the Location upsert for one zone.
pub fn merge_location(zone_id: i64) -> Query {
    Query::new(MERGE_LOCATION.to_string()).param("zone_id", zone_id)
}

/// Build the TRIP upsert for one cleaned record.
pub fn merge_trip(trip: &TripRecord, edge_match: EdgeMatch) -> Query {
    let cypher = match edge_match {
        EdgeMatch::FullProperties => MERGE_TRIP_FULL_PROPERTIES,
        EdgeMatch::EndpointsOnly => MERGE_TRIP_ENDPOINTS_ONLY,
    };

    Query::new(cypher.to_string())
        .param("pickup_zone", trip.pickup_zone)
        .param("dropoff_zone", trip.dropoff_zone)
        .param("distance", trip.distance)
        .param("fare", trip.fare)
        .param("pickup_dt", trip.pickup_dt)
        .param("dropoff_dt", trip.dropoff_dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripgraph_core::trip::parse_timestamp;

    fn sample_trip() -> TripRecord {
        TripRecord {
            pickup_dt: parse_timestamp("2022-03-01 08:15:00").unwrap(),
            dropoff_dt: parse_timestamp("2022-03-01 08:30:00").unwrap(),
            pickup_zone: 3,
            dropoff_zone: 18,
            distance: 1.2,
            fare: 9.0,
        }
    }

    #[test]
    fn test_location_upsert_is_keyed_by_name() {
        // MERGE on the name key is what makes repeated loads idempotent for
        // nodes: at most one Location per zone ID.
        assert!(MERGE_LOCATION.starts_with("MERGE"));
        assert!(MERGE_LOCATION.contains("Location {name: $zone_id}"));
        assert!(!MERGE_LOCATION.contains("CREATE"));
    }

    #[test]
    fn test_full_property_variant_merges_on_properties() {
        assert!(MERGE_TRIP_FULL_PROPERTIES.contains("MERGE (p)-[:TRIP {"));
        for param in ["$distance", "$fare", "$pickup_dt", "$dropoff_dt"] {
            assert!(MERGE_TRIP_FULL_PROPERTIES.contains(param));
        }
        assert!(!MERGE_TRIP_FULL_PROPERTIES.contains("SET"));
    }

    #[test]
    fn test_endpoints_variant_sets_properties_outside_the_key() {
        assert!(MERGE_TRIP_ENDPOINTS_ONLY.contains("MERGE (p)-[t:TRIP]->(d)"));
        assert!(MERGE_TRIP_ENDPOINTS_ONLY.contains("SET t.distance"));
    }

    #[test]
    fn test_trip_query_carries_all_params() {
        let query = merge_trip(&sample_trip(), EdgeMatch::FullProperties);
        for param in ["pickup_zone", "dropoff_zone", "distance", "fare", "pickup_dt", "dropoff_dt"] {
            assert!(query.has_param_key(param), "missing param {param}");
        }
    }

    #[test]
    fn test_edges_match_existing_locations_not_create_them() {
        // Endpoints are MATCHed, never MERGEd, so the edge upsert can only
        // connect nodes the per-row node upserts already guaranteed.
        assert!(MERGE_TRIP_FULL_PROPERTIES.starts_with("MATCH (p:Location"));
        assert!(MERGE_TRIP_ENDPOINTS_ONLY.starts_with("MATCH (p:Location"));
    }
}
