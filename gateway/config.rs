use std::{env, path::PathBuf};

/// Credential value shipped in the sample `.env`; treated as absent.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_LLM_ENDPOINT: &str = "http://127.0.0.1:9000/generate";

/// Process configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds.
    pub bind: String,
    /// External text-generation endpoint.
    pub llm_endpoint: String,
    /// Credential for the generation service; `None` forces the
    /// deterministic explanation branch.
    pub llm_api_key: Option<String>,
    /// Optional JSONL log sink.
    pub log_path: Option<PathBuf>,
    /// Optional fixed seed for reproducible mock telemetry.
    pub telemetry_seed: Option<u64>,
}

impl GatewayConfig {
    /// Reads configuration from the environment (after `.env` loading).
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind: env::var("MEDISENSE_BIND").unwrap_or_else(|_| DEFAULT_BIND.into()),
            llm_endpoint: env::var("MEDISENSE_LLM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_LLM_ENDPOINT.into()),
            llm_api_key: sanitize_credential(env::var("MEDISENSE_LLM_API_KEY").ok()),
            log_path: env::var("MEDISENSE_LOG_PATH").ok().map(PathBuf::from),
            telemetry_seed: env::var("MEDISENSE_TELEMETRY_SEED")
                .ok()
                .and_then(|raw| raw.parse().ok()),
        }
    }
}

/// Normalizes a raw credential; empty and placeholder values count as unset.
fn sanitize_credential(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != PLACEHOLDER_API_KEY)
}
