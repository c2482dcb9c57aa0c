use medisense_engine::{PriorityInputs, RiskInputs};
use serde::{Deserialize, Serialize};

/// Name reference to the corridor the engine recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedRouteRef {
    /// Display name of the route.
    pub name: String,
}

/// The merged computed object handed to the report generator.
///
/// Carries the raw telemetry alongside the derived scores so both branches
/// can reference either; values arrive unrounded and are formatted only
/// while rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    /// Raw delay risk telemetry.
    #[serde(flatten)]
    pub risk: RiskInputs,
    /// Raw clinical priority telemetry.
    #[serde(flatten)]
    pub priority: PriorityInputs,
    /// Composite delay risk score.
    pub delay_risk_score: f64,
    /// Composite medical priority score.
    pub medical_priority_score: f64,
    /// Route picked by the selection pass.
    pub recommended_route: RecommendedRouteRef,
    /// Whole minutes saved versus the second-best corridor.
    pub time_saved: i64,
    /// Display accuracy string echoed verbatim into the report.
    pub accuracy: String,
}
