use serde::{Deserialize, Serialize};

/// Raw congestion and environment readings feeding the delay risk score.
///
/// Components are conventionally in `[0, 1]` but are consumed as-is: the
/// engine neither validates nor clamps, so out-of-range telemetry produces
/// out-of-range scores downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInputs {
    /// Live road congestion estimate.
    pub traffic_risk: f64,
    /// Adverse weather estimate.
    pub weather_risk: f64,
    /// Historical share of delayed runs on comparable corridors.
    pub historical_delay_rate: f64,
    /// Density of active incidents along the corridor.
    pub incident_density: f64,
}

/// Clinical urgency readings feeding the medical priority score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityInputs {
    /// Emergency level of the shipment.
    pub emergency_level: f64,
    /// How quickly the cargo loses clinical value.
    pub time_sensitivity: f64,
    /// Criticality of the supplies being moved.
    pub critical_supply_factor: f64,
}

/// Clinical priority classification of a corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    /// Reserved for life-critical transports.
    Critical,
    /// General medical supply traffic.
    Standard,
}

/// Immutable catalog entry describing one transport corridor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable distance label.
    pub distance: String,
    /// Unimpeded travel time in minutes.
    pub base_time: f64,
    /// Multiplier applied to the composite delay risk on this corridor.
    pub risk_factor: f64,
    /// Fixed objective penalty for routing non-priority traffic here.
    pub priority_penalty: f64,
    /// Dashboard accent color.
    pub color: String,
    /// Clinical priority tier.
    pub priority: PriorityTier,
}

/// A catalog route extended with per-evaluation derived metrics.
///
/// Derived fresh for every evaluation cycle and discarded after rendering;
/// nothing here is persisted or mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRoute {
    /// The underlying catalog entry.
    #[serde(flatten)]
    pub route: Route,
    /// Delay risk contribution on this corridor.
    pub delay_risk: f64,
    /// Scalar minimized during selection.
    pub objective_value: f64,
    /// Projected travel time in minutes under current risk.
    pub estimated_time: f64,
}
