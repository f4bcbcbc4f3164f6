//! Parameter structures for Guidepost operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future host UIs) without framework-specific
//! derives or dependencies. Interface layers define their own wrapper structs
//! with framework derives (clap, etc.) and convert into these core types via
//! `From`, keeping the domain layer free of UI concerns.

use serde::{Deserialize, Serialize};

/// Generic parameters for operations addressing one step.
///
/// Used for select, complete, availability, and show operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepRef {
    /// The ID of the step to operate on
    pub id: String,
}

/// Parameters for a troubleshooting question to the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskAssistant {
    /// Free-text question; empty input is ignored by the gateway
    pub question: String,
}

/// Parameters for an assistant-backed step search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text search query
    pub query: String,
}
