//! Lading Model Provider Layer
//!
//! Implementations of the [`LanguageModel`] trait from `lading-domain`.
//!
//! # Providers
//!
//! - `MockModel`: deterministic mock for testing
//! - `OllamaModel`: local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use lading_llm::MockModel;
//! use lading_domain::traits::LanguageModel;
//!
//! let model = MockModel::new(r#"{"document_type": "Invoice"}"#);
//! let response = model.complete("classify this").unwrap();
//! assert!(response.contains("Invoice"));
//! ```

#![warn(missing_docs)]

pub mod ollama;

use lading_domain::traits::LanguageModel;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaModel;

/// Errors that can occur during model operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available on the endpoint
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Model error: {0}")]
    Other(String),
}

/// Mock model for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use lading_llm::MockModel;
/// use lading_domain::traits::LanguageModel;
///
/// // Fixed response for every prompt
/// let model = MockModel::new("fixed");
/// assert_eq!(model.complete("any prompt").unwrap(), "fixed");
///
/// // Per-prompt responses
/// let mut model = MockModel::default();
/// model.add_response("prompt1", "response1");
/// assert_eq!(model.complete("prompt1").unwrap(), "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockModel {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

const ERROR_MARKER: &str = "\u{0}ERROR";

impl MockModel {
    /// Create a mock returning a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure a specific prompt to fail with a communication error
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), ERROR_MARKER.to_string());
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LanguageModel for MockModel {
    type Error = LlmError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == ERROR_MARKER {
                return Err(LlmError::Communication("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
