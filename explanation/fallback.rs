use std::fmt::Write;

use crate::context::ReportContext;

const CRITICAL_RISK_THRESHOLD: f64 = 0.7;
const MODERATE_RISK_THRESHOLD: f64 = 0.4;
const LIFE_CRITICAL_THRESHOLD: f64 = 0.8;
const WEATHER_CLAUSE_THRESHOLD: f64 = 0.5;

/// Renders the deterministic four-section report.
///
/// Narrative tiers are strict greater-than thresholds checked highest
/// first; the weather clause appears only under elevated weather risk, and
/// the accuracy string is echoed verbatim.
#[must_use]
pub fn render_fallback(context: &ReportContext) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "### Recommended Route");
    let _ = writeln!(
        report,
        "**{}** is the optimal transport corridor under current network conditions.",
        context.recommended_route.name
    );

    let _ = writeln!(report, "\n### Estimated Time Saved");
    let _ = writeln!(
        report,
        "Approximately **{} minutes** versus the next-best alternative corridor.",
        context.time_saved
    );

    let _ = writeln!(report, "\n### Operational Risk Explanation");
    let _ = write!(report, "{}", risk_narrative(context.delay_risk_score));
    let _ = write!(report, " {}", priority_narrative(context.medical_priority_score));
    if context.risk.weather_risk > WEATHER_CLAUSE_THRESHOLD {
        let _ = write!(
            report,
            " Elevated weather risk is an active contributor and has been weighted into the corridor choice."
        );
    }
    let _ = writeln!(
        report,
        " Dispatch should proceed via {}.",
        context.recommended_route.name
    );

    let _ = writeln!(report, "\n### Model Confidence Score");
    let _ = writeln!(report, "Risk model confidence is **{}**.", context.accuracy);

    report
}

fn risk_narrative(delay_risk_score: f64) -> String {
    if delay_risk_score > CRITICAL_RISK_THRESHOLD {
        format!(
            "Composite delay risk of **{delay_risk_score:.2}** signals critical congestion across the corridor network; stacked traffic, incident, and historical delay pressure put this delivery window at high risk of slippage."
        )
    } else if delay_risk_score > MODERATE_RISK_THRESHOLD {
        format!(
            "Composite delay risk of **{delay_risk_score:.2}** indicates moderate friction; localized congestion and weather may introduce minor delays without threatening the delivery window."
        )
    } else {
        format!(
            "Composite delay risk of **{delay_risk_score:.2}** reflects a stable network with no significant delay pressure on the selected corridor."
        )
    }
}

fn priority_narrative(medical_priority_score: f64) -> String {
    if medical_priority_score > LIFE_CRITICAL_THRESHOLD {
        format!(
            "The shipment profile scores **{medical_priority_score:.2}**, a Life-Critical classification, so routing favors arrival certainty over distance."
        )
    } else {
        format!(
            "The shipment profile scores **{medical_priority_score:.2}**, a Time-Sensitive classification, so routing balances arrival time against corridor risk."
        )
    }
}
