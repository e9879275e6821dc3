//! Per-row transactional load of cleaned trips.

use neo4rs::Txn;
use tracing::{debug, info, warn};

use tripgraph_core::{EdgeMatch, TripError, TripRecord, TripResult};

use crate::queries;
use crate::GraphClient;

/// Counters for one load run.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub rows_loaded: usize,
    pub node_upserts: usize,
    pub edge_upserts: usize,
}

/// Load every record into the graph, one transaction per row.
///
/// Write order per row is pickup node, dropoff node, then edge, and the
/// three are atomic together: the transaction commits only if all three
/// succeed. Atomicity never extends across rows — a failure rolls back the
/// current row, surfaces as a write error, and halts the run, leaving the
/// rows already committed in place.
pub async fn load_trips(
    client: &GraphClient,
    trips: &[TripRecord],
    edge_match: EdgeMatch,
) -> TripResult<LoadResult> {
    let mut result = LoadResult::default();

    for (row, trip) in trips.iter().enumerate() {
        let mut txn = client
            .inner()
            .start_txn()
            .await
            .map_err(|e| TripError::write(format!("row {row}: failed to start transaction: {e}")))?;

        match write_trip(&mut txn, trip, edge_match).await {
            Ok(()) => {
                txn.commit()
                    .await
                    .map_err(|e| TripError::write(format!("row {row}: commit failed: {e}")))?;
                result.rows_loaded += 1;
                result.node_upserts += 2;
                result.edge_upserts += 1;
                debug!(row, pickup = trip.pickup_zone, dropoff = trip.dropoff_zone, "Loaded trip");
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(row, error = %rollback_err, "Rollback failed after write error");
                }
                return Err(TripError::write(format!("row {row}: {e}")));
            }
        }
    }

    info!(
        rows = result.rows_loaded,
        nodes = result.node_upserts,
        edges = result.edge_upserts,
        "Load complete"
    );

    Ok(result)
}

/// Issue the three upserts for one trip inside an open transaction.
async fn write_trip(txn: &mut Txn, trip: &TripRecord, edge_match: EdgeMatch) -> TripResult<()> {
    txn.run(queries::merge_location(trip.pickup_zone))
        .await
        .map_err(|e| TripError::write(format!("pickup node upsert: {e}")))?;

    txn.run(queries::merge_location(trip.dropoff_zone))
        .await
        .map_err(|e| TripError::write(format!("dropoff node upsert: {e}")))?;

    txn.run(queries::merge_trip(trip, edge_match))
        .await
        .map_err(|e| TripError::write(format!("trip edge upsert: {e}")))?;

    Ok(())
}
