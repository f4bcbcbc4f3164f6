//! Assistant gateway for the installation guide.
//!
//! This module mediates between the session and an external text-generation
//! collaborator. It owns the conversation transcript and implements the two
//! assistant operations:
//!
//! - [`AssistantGateway::troubleshoot`]: answer a free-text question with the
//!   current step's context attached
//! - [`AssistantGateway::search_steps`]: map a free-text query to relevant
//!   step IDs
//!
//! # Failure Semantics
//!
//! Collaborator failures never reach the host. `troubleshoot` degrades to a
//! fixed fallback answer appended to the transcript; `search_steps` degrades
//! to an empty result. From the caller's point of view both operations always
//! resolve.
//!
//! # Concurrency
//!
//! The gateway is single-writer: operations take `&mut self`, so the borrow
//! checker enforces the one-outstanding-request discipline that keeps
//! user/assistant turn pairs from interleaving. [`AssistantGateway::is_busy`]
//! reports the in-flight state for hosts that poll from another vantage
//! point (e.g. a UI thread holding a shared handle).

use log::warn;
use serde::{Deserialize, Serialize};

mod client;
mod config;
mod error;
mod gemini;
pub mod prompt;

pub use client::{GenerationRequest, TextGenerator};
pub use config::AssistantConfig;
pub use error::AssistantError;
pub use gemini::GeminiClient;

use crate::models::Step;

/// Fallback answer when the collaborator responds with nothing usable.
pub const EMPTY_RESPONSE_FALLBACK: &str = "I'm sorry, I couldn't process that request.";

/// Fallback answer when the collaborator can not be reached at all.
pub const ERROR_FALLBACK: &str =
    "An error occurred while reaching the AI assistant. Please try again later.";

/// Speaker of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One turn in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Gateway between the session and the text-generation collaborator.
pub struct AssistantGateway {
    generator: Box<dyn TextGenerator>,
    transcript: Vec<Turn>,
    busy: bool,
}

impl AssistantGateway {
    /// Create a gateway over a text-generation collaborator.
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            transcript: Vec::new(),
            busy: false,
        }
    }

    /// The conversation transcript, in turn order.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Whether a collaborator request is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Clear the conversation transcript.
    ///
    /// Host-initiated; nothing in the core requires it.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Answer a free-text question in the context of the current step.
    ///
    /// An empty (or whitespace-only) query is silently ignored: no transcript
    /// change, no collaborator call, `None` returned. Otherwise the query is
    /// appended to the transcript as a user turn before the request goes out,
    /// and the collaborator's answer — or a fixed fallback on any failure —
    /// is appended as the assistant turn and returned.
    pub async fn troubleshoot(&mut self, query: &str, current_step: Option<&Step>) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        // Snapshot the step context before suspending; the session may move
        // on while the request is in flight.
        let context = prompt::step_context(current_step);
        let request = GenerationRequest::text(prompt::troubleshoot(query, &context));

        self.transcript.push(Turn::user(query));

        self.busy = true;
        let answer = match self.generator.generate(request).await {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_FALLBACK.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!("troubleshoot: collaborator failure: {e}");
                ERROR_FALLBACK.to_string()
            }
        };
        self.busy = false;

        self.transcript.push(Turn::assistant(answer.clone()));
        Some(answer)
    }

    /// Map a free-text query to relevant step IDs.
    ///
    /// The collaborator sees only id/title/short-description per step. Any
    /// failure — unreachable collaborator, non-JSON answer, wrong shape —
    /// yields an empty result. The transcript is not touched.
    pub async fn search_steps(&mut self, query: &str, steps: &[Step]) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let request = GenerationRequest::json(prompt::search(query, steps));

        self.busy = true;
        let response = self.generator.generate(request).await;
        self.busy = false;

        match response {
            Ok(text) => serde_json::from_str::<Vec<String>>(&text).unwrap_or_else(|e| {
                warn!("search_steps: collaborator returned malformed IDs: {e}");
                Vec::new()
            }),
            Err(e) => {
                warn!("search_steps: collaborator failure: {e}");
                Vec::new()
            }
        }
    }
}
