//! Data models for guide steps and session progress.
//!
//! This module contains the core domain models for the Guidepost installation
//! wizard. Display implementations for these models live in
//! [`crate::display::models`] to maintain clean separation of concerns between
//! data structures and presentation logic.
//!
//! # Model Overview
//!
//! - [`Step`]: one catalog entry — immutable instructional content plus the
//!   live [`StepStatus`] overlay maintained by the tracker
//! - [`StepStatus`] / [`Difficulty`]: type-safe enumerations with string and
//!   icon representations
//! - [`CompletionRecord`] / [`ProgressSummary`]: session-scoped progress data
//!
//! # Examples
//!
//! ```rust
//! use guidepost_core::models::{Difficulty, Step, StepStatus};
//!
//! let step = Step {
//!     id: "step-1".to_string(),
//!     title: "Unboxing & Inventory".to_string(),
//!     short_desc: "Verify all components and tools are ready.".to_string(),
//!     full_desc: "Carefully open the main crate.".to_string(),
//!     status: StepStatus::Pending,
//!     difficulty: Difficulty::Beginner,
//!     estimated_time: "10 mins".to_string(),
//!     tips: vec![],
//!     tools: vec![],
//!     specs: vec![],
//! };
//! println!("{}", step); // Shows ○ Pending status icon
//! ```

pub mod status;
pub mod step;
pub mod summary;


// Re-export all public types at the models level
pub use status::{Difficulty, StepStatus};
pub use step::{SpecEntry, Step};
pub use summary::{CompletionRecord, ProgressSummary};
