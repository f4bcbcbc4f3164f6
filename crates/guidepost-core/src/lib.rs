//! Core library for the Guidepost installation wizard.
//!
//! This crate provides the session logic for a guided, step-by-step
//! installation: the immutable step catalog, the progress state machine, and
//! the assistant gateway that forwards contextual questions to an external
//! text-generation collaborator.
//!
//! # Architecture
//!
//! Two cooperating components own all session state:
//!
//! - [`ProgressTracker`]: the ordered step list with live statuses, the
//!   completion log, the current-step reference, and linear availability
//!   gating. Synchronous, single-writer, no suspension points.
//! - [`assistant::AssistantGateway`]: the conversation transcript and the
//!   request/response contract with the text-generation collaborator.
//!   Collaborator failures degrade to fixed fallbacks and never surface.
//!
//! Neither component depends on the other; the host wires them together and
//! passes the tracker's current step into the gateway as call-time context.
//!
//! # Quick Start
//!
//! ```rust
//! use guidepost_core::{Catalog, ProgressTracker};
//!
//! # fn example() -> guidepost_core::Result<()> {
//! let catalog = Catalog::from_json(
//!     r#"[{"id": "step-1", "title": "Unboxing", "short_desc": "Open the crate.",
//!          "full_desc": "Carefully open the main crate.", "difficulty": "beginner",
//!          "estimated_time": "10 mins"}]"#,
//! )?;
//!
//! let mut tracker = ProgressTracker::new(catalog);
//! tracker.select_step("step-1")?;
//! tracker.complete_step("step-1")?;
//! assert!(tracker.is_finished());
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use assistant::{AssistantConfig, AssistantGateway, GeminiClient, TextGenerator, Turn, TurnRole};
pub use catalog::Catalog;
pub use display::{Dashboard, History, LocalDateTime, Transcript};
pub use error::{GuideError, Result};
pub use models::{CompletionRecord, Difficulty, ProgressSummary, SpecEntry, Step, StepStatus};
pub use params::{AskAssistant, SearchQuery, StepRef};
pub use tracker::ProgressTracker;
