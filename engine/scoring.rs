use crate::model::{PriorityInputs, RiskInputs, Route, ScoredRoute};

// Delay risk weights. They sum to one so in-range inputs stay in range.
const TRAFFIC_WEIGHT: f64 = 0.4;
const WEATHER_WEIGHT: f64 = 0.3;
const HISTORY_WEIGHT: f64 = 0.2;
const INCIDENT_WEIGHT: f64 = 0.1;

// Medical priority weights, same convention.
const EMERGENCY_WEIGHT: f64 = 0.5;
const SENSITIVITY_WEIGHT: f64 = 0.3;
const SUPPLY_WEIGHT: f64 = 0.2;

/// Minutes of projected slippage per unit of corridor delay risk.
const DELAY_MINUTES_FACTOR: f64 = 10.0;

/// Computes the composite delay risk score from raw telemetry.
#[must_use]
pub fn delay_risk_score(inputs: &RiskInputs) -> f64 {
    TRAFFIC_WEIGHT * inputs.traffic_risk
        + WEATHER_WEIGHT * inputs.weather_risk
        + HISTORY_WEIGHT * inputs.historical_delay_rate
        + INCIDENT_WEIGHT * inputs.incident_density
}

/// Computes the composite medical priority score.
#[must_use]
pub fn medical_priority_score(inputs: &PriorityInputs) -> f64 {
    EMERGENCY_WEIGHT * inputs.emergency_level
        + SENSITIVITY_WEIGHT * inputs.time_sensitivity
        + SUPPLY_WEIGHT * inputs.critical_supply_factor
}

/// Derives per-route metrics from the composite delay risk score.
#[must_use]
pub fn score_route(route: &Route, delay_risk_score: f64) -> ScoredRoute {
    let delay_risk = delay_risk_score * route.risk_factor;
    ScoredRoute {
        delay_risk,
        objective_value: delay_risk + route.base_time + route.priority_penalty,
        estimated_time: route.base_time + delay_risk * DELAY_MINUTES_FACTOR,
        route: route.clone(),
    }
}

/// Scores every route in the catalog slice against one delay risk score.
#[must_use]
pub fn score_routes(routes: &[Route], delay_risk_score: f64) -> Vec<ScoredRoute> {
    routes
        .iter()
        .map(|route| score_route(route, delay_risk_score))
        .collect()
}

/// Rounds to two decimals for display.
///
/// Applied only at the presentation boundary; intermediate scores feed
/// downstream arithmetic unrounded.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriorityTier;

    const EPS: f64 = 1e-9;

    fn route(id: &str, base_time: f64, risk_factor: f64, priority_penalty: f64) -> Route {
        Route {
            id: id.into(),
            name: format!("Corridor {id}"),
            distance: "10 km".into(),
            base_time,
            risk_factor,
            priority_penalty,
            color: "#64748b".into(),
            priority: PriorityTier::Standard,
        }
    }

    #[test]
    fn delay_risk_matches_weighted_sum() {
        let inputs = RiskInputs {
            traffic_risk: 0.5,
            weather_risk: 0.1,
            historical_delay_rate: 0.13,
            incident_density: 0.1,
        };
        assert!((delay_risk_score(&inputs) - 0.266).abs() < EPS);
    }

    #[test]
    fn priority_matches_weighted_sum() {
        let inputs = PriorityInputs {
            emergency_level: 0.8,
            time_sensitivity: 0.6,
            critical_supply_factor: 0.5,
        };
        assert!((medical_priority_score(&inputs) - 0.68).abs() < EPS);
    }

    #[test]
    fn in_range_inputs_yield_in_range_scores() {
        let corners = [0.0, 0.25, 0.5, 0.75, 1.0];
        for &a in &corners {
            for &b in &corners {
                let risk = RiskInputs {
                    traffic_risk: a,
                    weather_risk: b,
                    historical_delay_rate: 1.0 - a,
                    incident_density: 1.0 - b,
                };
                let score = delay_risk_score(&risk);
                assert!((0.0..=1.0).contains(&score), "delay score {score} escaped");

                let priority = PriorityInputs {
                    emergency_level: a,
                    time_sensitivity: b,
                    critical_supply_factor: 1.0 - a,
                };
                let score = medical_priority_score(&priority);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "priority score {score} escaped"
                );
            }
        }
    }

    #[test]
    fn out_of_range_inputs_pass_through_unclamped() {
        let inputs = RiskInputs {
            traffic_risk: 2.0,
            weather_risk: 0.0,
            historical_delay_rate: 0.0,
            incident_density: 0.0,
        };
        assert!((delay_risk_score(&inputs) - 0.8).abs() < EPS);
    }

    #[test]
    fn scoring_derives_route_metrics() {
        let alpha = score_route(&route("alpha", 12.0, 0.1, 0.0), 0.266);
        assert!((alpha.delay_risk - 0.0266).abs() < EPS);
        assert!((alpha.objective_value - 12.0266).abs() < EPS);
        assert!((alpha.estimated_time - 12.266).abs() < EPS);

        let gamma = score_route(&route("gamma", 28.0, 0.8, 15.0), 0.266);
        assert!((gamma.delay_risk - 0.2128).abs() < EPS);
        assert!((gamma.objective_value - 43.2128).abs() < EPS);
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert!((round2(0.265) - 0.27).abs() < EPS);
        assert!((round2(-0.265) + 0.27).abs() < EPS);
        assert!((round2(12.0266) - 12.03).abs() < EPS);
    }
}
