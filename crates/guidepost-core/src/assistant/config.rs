//! Assistant collaborator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the text-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    pub api_key_env: String,

    /// API base URL
    pub base_url: String,

    /// Maximum tokens per response
    pub max_output_tokens: u32,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_output_tokens: 1024,
            timeout_ms: 30_000,
        }
    }
}

impl AssistantConfig {
    /// Read the API key from the configured environment variable.
    ///
    /// A missing variable resolves to an empty key; the resulting requests
    /// fail at the collaborator and degrade to the gateway's fallback answer
    /// instead of blocking session start.
    pub fn api_key(&self) -> String {
        std::env::var(&self.api_key_env).unwrap_or_default()
    }
}
