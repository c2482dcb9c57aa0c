use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the fleet collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The dispatch referenced a fleet unit that does not exist.
    #[error("unknown fleet unit: {0}")]
    UnknownUnit(String),
}

/// Operational state of one fleet unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetStatus {
    /// Parked at a depot awaiting assignment.
    Standby,
    /// Actively driving an assigned corridor.
    EnRoute,
    /// At the destination handing over cargo.
    Delivering,
    /// Heading back to the depot.
    Returning,
}

/// One vehicle in the simulated fleet roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetUnit {
    /// Unique unit identifier.
    pub id: String,
    /// Vehicle description.
    pub vehicle: String,
    /// Cargo currently on board.
    pub cargo: String,
    /// Operational state.
    pub status: FleetStatus,
    /// Assigned corridor, when en route.
    pub route_id: Option<String>,
    /// Timestamp of the last state change.
    pub updated_at: DateTime<Utc>,
}

/// Dispatch order for one fleet unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchCommand {
    /// Unit to dispatch.
    pub fleet_id: String,
    /// Corridor the unit should take.
    pub route_id: String,
}

/// Seeds the initial in-memory roster.
#[must_use]
pub fn seed_roster() -> Vec<FleetUnit> {
    let now = Utc::now();
    let unit = |id: &str, vehicle: &str, cargo: &str, status| FleetUnit {
        id: id.into(),
        vehicle: vehicle.into(),
        cargo: cargo.into(),
        status,
        route_id: None,
        updated_at: now,
    };
    vec![
        unit(
            "MS-AMB-01",
            "Ambulance (Type C)",
            "Whole blood, O-negative",
            FleetStatus::Standby,
        ),
        unit(
            "MS-AMB-02",
            "Ambulance (Type B)",
            "Trauma kits",
            FleetStatus::Returning,
        ),
        unit(
            "MS-VAN-01",
            "Refrigerated van",
            "Vaccine pallet",
            FleetStatus::Standby,
        ),
        unit(
            "MS-VAN-02",
            "Refrigerated van",
            "Insulin cold chain",
            FleetStatus::Delivering,
        ),
        unit(
            "MS-BIK-01",
            "Courier motorcycle",
            "Pathology samples",
            FleetStatus::Standby,
        ),
    ]
}

/// In-memory fleet roster shared across requests.
///
/// Mutations happen atomically per request under the write lock with
/// last-write-wins semantics; nothing is persisted across restarts.
#[derive(Debug)]
pub struct FleetState {
    units: RwLock<Vec<FleetUnit>>,
}

impl FleetState {
    /// Creates state over the provided roster.
    #[must_use]
    pub const fn new(units: Vec<FleetUnit>) -> Self {
        Self {
            units: RwLock::new(units),
        }
    }

    /// Creates state over the default seeded roster.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_roster())
    }

    /// Returns a snapshot of the roster.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FleetUnit> {
        self.units.read().clone()
    }

    /// Dispatches one unit onto a corridor, returning its updated record.
    pub fn dispatch(&self, command: &DispatchCommand) -> Result<FleetUnit, TelemetryError> {
        let mut units = self.units.write();
        let unit = units
            .iter_mut()
            .find(|unit| unit.id == command.fleet_id)
            .ok_or_else(|| TelemetryError::UnknownUnit(command.fleet_id.clone()))?;
        unit.status = FleetStatus::EnRoute;
        unit.route_id = Some(command.route_id.clone());
        unit.updated_at = Utc::now();
        Ok(unit.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_marks_the_unit_en_route() {
        let state = FleetState::seeded();
        let updated = state
            .dispatch(&DispatchCommand {
                fleet_id: "MS-AMB-01".into(),
                route_id: "route-alpha".into(),
            })
            .unwrap();
        assert_eq!(updated.status, FleetStatus::EnRoute);
        assert_eq!(updated.route_id.as_deref(), Some("route-alpha"));

        let snapshot = state.snapshot();
        let unit = snapshot.iter().find(|unit| unit.id == "MS-AMB-01").unwrap();
        assert_eq!(unit.status, FleetStatus::EnRoute);
    }

    #[test]
    fn last_dispatch_wins() {
        let state = FleetState::seeded();
        let command = |route: &str| DispatchCommand {
            fleet_id: "MS-VAN-01".into(),
            route_id: route.into(),
        };
        state.dispatch(&command("route-alpha")).unwrap();
        let updated = state.dispatch(&command("route-beta")).unwrap();
        assert_eq!(updated.route_id.as_deref(), Some("route-beta"));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let state = FleetState::seeded();
        let err = state
            .dispatch(&DispatchCommand {
                fleet_id: "MS-TRUCK-99".into(),
                route_id: "route-alpha".into(),
            })
            .unwrap_err();
        assert_eq!(err, TelemetryError::UnknownUnit("MS-TRUCK-99".into()));
    }
}
