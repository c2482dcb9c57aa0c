use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;

use medisense_explanation::{ExplanationGenerator, ExplanationTelemetry, HttpTextGenerator};
use medisense_telemetry::{FleetState, StatusSampler};
use shared_logging::LogLevel;

use crate::{config::GatewayConfig, telemetry::OpsTelemetry};

/// Shared application state handed to every handler.
pub struct AppState {
    /// Mock telemetry source; the lock keeps the RNG stream sequential.
    pub sampler: Mutex<StatusSampler>,
    /// In-memory fleet roster.
    pub fleet: FleetState,
    /// Report generator with its branch fixed by configuration.
    pub explainer: ExplanationGenerator,
    /// Optional request-event log sink.
    pub telemetry: Option<OpsTelemetry>,
}

impl AppState {
    /// Wires the collaborators from resolved configuration.
    ///
    /// The text-generation client is constructed once here and injected
    /// into the generator; without a usable credential the generator never
    /// leaves the deterministic branch.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let sampler = config
            .telemetry_seed
            .map_or_else(StatusSampler::from_entropy, StatusSampler::with_seed);

        let mut explainer = match &config.llm_api_key {
            Some(key) => {
                let generator =
                    HttpTextGenerator::new(config.llm_endpoint.clone(), Some(key.clone()))
                        .context("building text generation client")?;
                ExplanationGenerator::with_external(Arc::new(generator))
            }
            None => ExplanationGenerator::fallback_only(),
        };

        let telemetry = match &config.log_path {
            Some(path) => {
                let ops = OpsTelemetry::builder("gateway")
                    .log_path(path)
                    .min_level(LogLevel::Info)
                    .build()
                    .context("opening gateway log sink")?;
                let explanation = ExplanationTelemetry::builder("explanation")
                    .log_path(path)
                    .min_level(LogLevel::Info)
                    .build()
                    .context("opening explanation log sink")?;
                explainer = explainer.telemetry(explanation);
                Some(ops)
            }
            None => None,
        };

        Ok(Self {
            sampler: Mutex::new(sampler),
            fleet: FleetState::seeded(),
            explainer,
            telemetry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> GatewayConfig {
        GatewayConfig {
            bind: "127.0.0.1:0".into(),
            llm_endpoint: "http://127.0.0.1:9000/generate".into(),
            llm_api_key: api_key.map(Into::into),
            log_path: None,
            telemetry_seed: Some(1),
        }
    }

    #[test]
    fn state_builds_without_a_credential() {
        let state = AppState::from_config(&config(None)).unwrap();
        assert!(state.telemetry.is_none());
        assert_eq!(state.fleet.snapshot().len(), 5);
    }

    #[test]
    fn state_builds_with_a_credential() {
        AppState::from_config(&config(Some("sk-medisense-123"))).unwrap();
    }
}
