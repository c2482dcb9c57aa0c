use medisense_engine::{PriorityTier, Route};

/// Returns the fixed corridor catalog served to the dashboard.
///
/// Reference data only; per-evaluation metrics are derived fresh by the
/// engine and never written back here.
#[must_use]
pub fn route_catalog() -> Vec<Route> {
    vec![
        Route {
            id: "route-alpha".into(),
            name: "Medical Emergency Corridor (Alpha)".into(),
            distance: "12.4 km".into(),
            base_time: 12.0,
            risk_factor: 0.1,
            priority_penalty: 0.0,
            color: "#16a34a".into(),
            priority: PriorityTier::Critical,
        },
        Route {
            id: "route-beta".into(),
            name: "Harborfront Express (Beta)".into(),
            distance: "16.8 km".into(),
            base_time: 18.0,
            risk_factor: 0.45,
            priority_penalty: 6.0,
            color: "#f59e0b".into(),
            priority: PriorityTier::Standard,
        },
        Route {
            id: "route-gamma".into(),
            name: "Industrial Belt (Gamma)".into(),
            distance: "24.1 km".into(),
            base_time: 28.0,
            risk_factor: 0.8,
            priority_penalty: 15.0,
            color: "#dc2626".into(),
            priority: PriorityTier::Standard,
        },
    ]
}
