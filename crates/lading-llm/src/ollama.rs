//! Ollama Provider Implementation
//!
//! Integration with Ollama's local generate API, for running the
//! classification model next to the data instead of shipping trading
//! paperwork to a hosted service.
//!
//! A provider makes exactly one attempt per call: the pipeline records a
//! failed chunk and moves on rather than retrying.

use crate::LlmError;
use lading_domain::traits::LanguageModel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model to run
pub const DEFAULT_MODEL: &str = "phi3:mini";

/// Default timeout for a single generate request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Ollama API provider for local model inference
pub struct OllamaModel {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Response from the Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaModel {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: model to run (e.g., "phi3:mini", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama provider with a specific request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
        }
    }

    /// Create a provider against the default local endpoint and model
    pub fn local_default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Generate text for a prompt
    ///
    /// # Errors
    ///
    /// Returns an error if Ollama is unreachable, the model is not pulled,
    /// the request times out, or the response body is not the expected
    /// shape. No retries are made.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<OllamaGenerateResponse>()
            .await
            .map(|r| r.response)
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

impl LanguageModel for OllamaModel {
    type Error = LlmError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; the extractor invokes this
        // from a blocking task.
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.generate(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_model_creation() {
        let model = OllamaModel::new("http://localhost:11434", "phi3:mini");
        assert_eq!(model.endpoint, "http://localhost:11434");
        assert_eq!(model.model, "phi3:mini");
    }

    #[test]
    fn test_ollama_local_default() {
        let model = OllamaModel::local_default();
        assert_eq!(model.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(model.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_ollama_unreachable_endpoint() {
        let model = OllamaModel::with_timeout(
            "http://127.0.0.1:1",
            "phi3:mini",
            Duration::from_millis(250),
        );

        let result = model.generate("test").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    // Integration test (requires a running Ollama instance)
    #[tokio::test]
    #[ignore]
    async fn test_ollama_generate_integration() {
        let model = OllamaModel::local_default();
        let result = model.generate("Say 'hello' and nothing else").await;

        if let Ok(response) = result {
            assert!(!response.is_empty());
        }
    }
}
