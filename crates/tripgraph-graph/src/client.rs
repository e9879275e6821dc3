//! Neo4j connection client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;

use tripgraph_core::{GraphConfig, TripError, TripResult};

/// Client owning the session to the graph database.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j and verify reachability.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates the
    /// pool object and does NOT establish a real bolt connection yet.  We run
    /// a cheap `RETURN 1` ping immediately so an unreachable or
    /// wrongly-credentialed database fails fast with a connectivity error
    /// instead of hanging until the first write.
    pub async fn connect(config: &GraphConfig) -> TripResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(4) // single sequential writer, keep the pool small
            .fetch_size(20)
            .build()
            .map_err(|e| TripError::connectivity(format!("invalid Neo4j config: {e}")))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| TripError::connectivity(format!("failed to create connection pool: {e}")))?;

        // Ping to force an actual TCP+bolt handshake.
        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(|e| TripError::connectivity(format!("Neo4j is not responding: {e}")))?;

        Ok(Self { graph })
    }

    /// Release the session. Dropping the client has the same effect; this
    /// exists so callers can make the end of the connection lifecycle
    /// explicit. At most one close per client.
    pub fn close(self) {
        drop(self);
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(&self, query: Query, field: &str) -> TripResult<Option<T>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .map_err(|e| TripError::write(format!("query failed: {e}")))?;

        match result.next().await {
            Ok(Some(row)) => {
                let val: T = row
                    .get(field)
                    .map_err(|e| TripError::write(format!("failed to get field '{field}': {e:?}")))?;
                Ok(Some(val))
            }
            _ => Ok(None),
        }
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> TripResult<GraphCounts> {
        let node_query = Query::new("MATCH (n:Location) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r:TRIP]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            locations: node_count as usize,
            trips: rel_count as usize,
        })
    }

    /// Get a reference to the underlying neo4rs Graph.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }
}

/// Location node and TRIP relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub locations: usize,
    pub trips: usize,
}
