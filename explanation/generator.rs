use std::sync::Arc;

use serde_json::json;
use shared_logging::LogLevel;

use crate::{
    context::ReportContext, external::TextGenerator, fallback::render_fallback,
    prompt::build_report_prompt, telemetry::ExplanationTelemetry,
};

/// Which branch produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorBranch {
    /// The external text-generation service answered.
    External,
    /// The deterministic template rendered the report.
    Fallback,
}

/// A finished markdown report and the branch that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationReport {
    /// Four-section markdown document.
    pub markdown: String,
    /// Producing branch, for observability and tests.
    pub branch: GeneratorBranch,
}

/// Two-branch report generator.
///
/// The branch is fixed at construction: a configured external generator is
/// attempted first and any failure transitions to the deterministic
/// fallback; without one the fallback renders directly. Either way the
/// caller always receives a report.
pub struct ExplanationGenerator {
    external: Option<Arc<dyn TextGenerator>>,
    telemetry: Option<ExplanationTelemetry>,
}

impl ExplanationGenerator {
    /// Creates a generator that only ever uses the deterministic template.
    #[must_use]
    pub const fn fallback_only() -> Self {
        Self {
            external: None,
            telemetry: None,
        }
    }

    /// Creates a generator that attempts the external service first.
    #[must_use]
    pub fn with_external(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            external: Some(generator),
            telemetry: None,
        }
    }

    /// Attaches a telemetry handle for diagnostics.
    #[must_use]
    pub fn telemetry(mut self, telemetry: ExplanationTelemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Generates a report; never fails.
    ///
    /// External failures are logged and fully masked by the fallback, so
    /// the worst case a caller observes is the deterministic text.
    pub async fn generate(&self, context: &ReportContext) -> ExplanationReport {
        if let Some(generator) = &self.external {
            match generator.generate(&build_report_prompt(context)).await {
                Ok(markdown) => {
                    return ExplanationReport {
                        markdown,
                        branch: GeneratorBranch::External,
                    };
                }
                Err(err) => {
                    if let Some(telemetry) = &self.telemetry {
                        let _ = telemetry.log(
                            LogLevel::Warn,
                            "external generation failed, using fallback",
                            json!({ "error": err.to_string() }),
                        );
                    }
                }
            }
        }
        ExplanationReport {
            markdown: render_fallback(context),
            branch: GeneratorBranch::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RecommendedRouteRef;
    use crate::external::GenerationError;
    use async_trait::async_trait;
    use medisense_engine::{PriorityInputs, RiskInputs};

    struct CannedGenerator;

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok("### Recommended Route\ncanned".into())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }
    }

    fn context() -> ReportContext {
        ReportContext {
            risk: RiskInputs {
                traffic_risk: 0.5,
                weather_risk: 0.6,
                historical_delay_rate: 0.2,
                incident_density: 0.1,
            },
            priority: PriorityInputs {
                emergency_level: 0.9,
                time_sensitivity: 0.8,
                critical_supply_factor: 0.7,
            },
            delay_risk_score: 0.85,
            medical_priority_score: 0.9,
            recommended_route: RecommendedRouteRef {
                name: "Medical Emergency Corridor (Alpha)".into(),
            },
            time_saved: 16,
            accuracy: "94.8%".into(),
        }
    }

    #[tokio::test]
    async fn unconfigured_generator_renders_the_template() {
        let report = ExplanationGenerator::fallback_only()
            .generate(&context())
            .await;
        assert_eq!(report.branch, GeneratorBranch::Fallback);
        assert!(report.markdown.contains("critical congestion"));
    }

    #[tokio::test]
    async fn external_success_returns_the_response_verbatim() {
        let report = ExplanationGenerator::with_external(Arc::new(CannedGenerator))
            .generate(&context())
            .await;
        assert_eq!(report.branch, GeneratorBranch::External);
        assert_eq!(report.markdown, "### Recommended Route\ncanned");
    }

    #[tokio::test]
    async fn external_failure_matches_the_unconfigured_output() {
        let input = context();
        let masked = ExplanationGenerator::with_external(Arc::new(FailingGenerator))
            .generate(&input)
            .await;
        let unconfigured = ExplanationGenerator::fallback_only().generate(&input).await;
        assert_eq!(masked, unconfigured);
        assert_eq!(masked.branch, GeneratorBranch::Fallback);
    }
}
