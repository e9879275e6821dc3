//! # Tripgraph Core
//!
//! Domain model and policy constants for the taxi-trip graph loader.

pub mod config;
pub mod error;
pub mod quality;
pub mod trip;
pub mod zones;

pub use config::{EdgeMatch, GraphConfig, LoadConfig};
pub use error::{TripError, TripResult};
pub use trip::TripRecord;
