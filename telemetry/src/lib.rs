#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! MediSense telemetry module – the simulated logistics collaborator.
//!
//! Everything here is mock data: the route catalog is fixed reference data,
//! status telemetry is drawn from a seedable random source, and the fleet
//! roster lives in process memory with no persistence.

/// Fixed corridor reference data.
#[path = "../catalog.rs"]
pub mod catalog;

/// In-memory fleet roster and dispatch.
#[path = "../fleet.rs"]
pub mod fleet;

/// Randomized operational status sampling.
#[path = "../status.rs"]
pub mod status;

pub use catalog::route_catalog;
pub use fleet::{seed_roster, DispatchCommand, FleetState, FleetStatus, FleetUnit, TelemetryError};
pub use status::{LogisticsStatus, StatusSampler};
