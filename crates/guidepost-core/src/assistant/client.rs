//! Text-generation collaborator trait.
//!
//! The gateway talks to its external collaborator through this seam, so hosts
//! and tests can substitute their own generator (the tests use a scripted
//! mock; production uses [`super::GeminiClient`]).

use async_trait::async_trait;

use super::error::AssistantError;

/// One request to the text-generation collaborator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The fully composed prompt
    pub prompt: String,

    /// Ask the collaborator for a JSON-only response (used by step search)
    pub json_output: bool,
}

impl GenerationRequest {
    /// Create a plain-text generation request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_output: false,
        }
    }

    /// Create a JSON-mode generation request.
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_output: true,
        }
    }
}

/// Abstract text-generation collaborator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a response for the given request.
    ///
    /// Implementations should apply their own transport-level timeout; the
    /// gateway never cancels an in-flight call.
    async fn generate(&self, request: GenerationRequest) -> Result<String, AssistantError>;
}
