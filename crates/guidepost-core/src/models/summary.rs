//! Session summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single entry in the session's completion log.
///
/// The insertion order of records is the order steps were completed in;
/// membership of a step ID in the log is what makes a step count as done.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRecord {
    /// ID of the completed step
    pub step_id: String,

    /// When the step was marked complete (UTC)
    pub completed_at: Timestamp,
}

/// Summary of session progress with step statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Total number of steps in the guide
    pub total_steps: u32,
    /// Number of completed steps
    pub completed_steps: u32,
    /// Number of steps not yet completed
    pub remaining_steps: u32,
    /// ID of the currently selected step, if any
    pub current_step_id: Option<String>,
    /// Whether every step in the guide has been completed
    pub finished: bool,
}

impl ProgressSummary {
    /// Completion percentage in the range `0.0..=100.0`.
    ///
    /// An empty guide reports 100% to match the finished derivation.
    pub fn percent(&self) -> f64 {
        if self.total_steps == 0 {
            100.0
        } else {
            f64::from(self.completed_steps) / f64::from(self.total_steps) * 100.0
        }
    }
}
