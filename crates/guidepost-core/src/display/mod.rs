//! Display formatting for session views.
//!
//! This module provides markdown-producing Display implementations, separated
//! from the domain models so that data structures stay presentation-free:
//!
//! - [`models`]: Display implementations for [`crate::models::Step`],
//!   statuses, the progress summary, and transcript turns
//! - [`collections`]: wrapper types for session views ([`Dashboard`],
//!   [`History`], [`Transcript`])
//! - [`datetime`]: timestamp formatting for the completion history
//!
//! All formatters produce markdown so the CLI's terminal renderer can style
//! the same text it would print plainly with color disabled.

pub mod collections;
pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::{Dashboard, History, Transcript};
pub use datetime::LocalDateTime;
