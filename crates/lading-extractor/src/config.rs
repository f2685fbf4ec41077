//! Configuration for the Field Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Field Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Model endpoint (Ollama API)
    pub endpoint: String,

    /// Model to run
    pub model: String,

    /// Maximum time for a single model call (seconds)
    pub call_timeout_secs: u64,

    /// Trimmed-character count under which a page counts as blank
    pub blank_threshold: usize,
}

impl ExtractorConfig {
    /// Get the call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "phi3:mini".to_string(),
            call_timeout_secs: 60,
            blank_threshold: lading_domain::DEFAULT_BLANK_THRESHOLD,
        }
    }
}
