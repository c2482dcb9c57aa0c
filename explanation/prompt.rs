use std::fmt::Write;

use crate::context::ReportContext;

/// Builds the natural-language prompt for the external branch.
///
/// Embeds every raw input, both composite scores, the recommendation, and
/// the accuracy string, and pins the response to the same four sections the
/// deterministic template emits.
#[must_use]
pub fn build_report_prompt(context: &ReportContext) -> String {
    let mut prompt = String::from(
        "You are the operations analyst for the MediSense medical logistics network. \
         Write a concise markdown report with exactly four sections, in this order, each \
         introduced by a '###' heading: 'Recommended Route', 'Estimated Time Saved', \
         'Operational Risk Explanation', 'Model Confidence Score'. Bold the key figures inline.\n\n",
    );

    let _ = writeln!(prompt, "Current telemetry:");
    let _ = writeln!(prompt, "- traffic risk: {}", context.risk.traffic_risk);
    let _ = writeln!(prompt, "- weather risk: {}", context.risk.weather_risk);
    let _ = writeln!(
        prompt,
        "- historical delay rate: {}",
        context.risk.historical_delay_rate
    );
    let _ = writeln!(
        prompt,
        "- incident density: {}",
        context.risk.incident_density
    );
    let _ = writeln!(
        prompt,
        "- emergency level: {}",
        context.priority.emergency_level
    );
    let _ = writeln!(
        prompt,
        "- time sensitivity: {}",
        context.priority.time_sensitivity
    );
    let _ = writeln!(
        prompt,
        "- critical supply factor: {}",
        context.priority.critical_supply_factor
    );

    let _ = writeln!(prompt, "\nComputed assessment:");
    let _ = writeln!(
        prompt,
        "- composite delay risk score: {}",
        context.delay_risk_score
    );
    let _ = writeln!(
        prompt,
        "- medical priority score: {}",
        context.medical_priority_score
    );
    let _ = writeln!(
        prompt,
        "- recommended route: {}",
        context.recommended_route.name
    );
    let _ = writeln!(
        prompt,
        "- estimated time saved: {} minutes",
        context.time_saved
    );
    let _ = writeln!(prompt, "- model accuracy: {}", context.accuracy);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RecommendedRouteRef;
    use medisense_engine::{PriorityInputs, RiskInputs};

    #[test]
    fn prompt_embeds_every_input_and_the_section_contract() {
        let context = ReportContext {
            risk: RiskInputs {
                traffic_risk: 0.52,
                weather_risk: 0.61,
                historical_delay_rate: 0.18,
                incident_density: 0.07,
            },
            priority: PriorityInputs {
                emergency_level: 0.93,
                time_sensitivity: 0.84,
                critical_supply_factor: 0.66,
            },
            delay_risk_score: 0.4404,
            medical_priority_score: 0.849,
            recommended_route: RecommendedRouteRef {
                name: "Harborfront Express (Beta)".into(),
            },
            time_saved: 9,
            accuracy: "95.2%".into(),
        };
        let prompt = build_report_prompt(&context);
        assert!(prompt.contains("traffic risk: 0.52"));
        assert!(prompt.contains("incident density: 0.07"));
        assert!(prompt.contains("critical supply factor: 0.66"));
        assert!(prompt.contains("composite delay risk score: 0.4404"));
        assert!(prompt.contains("recommended route: Harborfront Express (Beta)"));
        assert!(prompt.contains("estimated time saved: 9 minutes"));
        assert!(prompt.contains("model accuracy: 95.2%"));
        assert!(prompt.contains("'Model Confidence Score'"));
    }
}
