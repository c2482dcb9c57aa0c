use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bound on one generation round-trip; slower calls count as failures and
/// the deterministic branch takes over.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

const MAX_TOKENS: u32 = 512;
const TEMPERATURE: f64 = 0.3;
const TOP_P: f64 = 0.9;

/// Failures of the external text-generation call.
///
/// Never propagated past the generator; every variant degrades to the
/// deterministic branch.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network, timeout, or HTTP-status failure reaching the service.
    #[error("text generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered 2xx with an empty body.
    #[error("text generation service returned an empty response")]
    EmptyResponse,
}

/// Seam for text-generation backends so tests can substitute fakes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produces the report body for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// HTTP client for an external generation endpoint.
///
/// Posts `{prompt, max_tokens, temperature, top_p}` and returns the `text`
/// field of the JSON response verbatim, without validating its structure.
#[derive(Debug)]
pub struct HttpTextGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTextGenerator {
    /// Creates a generator for the endpoint, optionally attaching an api key.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = GenerateRequest {
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };
        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        let response = request.send().await?.error_for_status()?;
        let body: GenerateResponse = response.json().await?;
        if body.text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(body.text)
    }
}
