//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Difficulty, StepStatus};

/// A labeled technical specification attached to a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecEntry {
    /// Specification name (e.g. "Torque")
    pub label: String,

    /// Specification value (e.g. "15 Nm")
    pub value: String,
}

/// Represents an individual step within the installation guide.
///
/// Everything except `status` is immutable catalog content; `status` is the
/// live overlay owned by the progress tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique, stable identifier for the step
    pub id: String,

    /// Brief title/summary of the step
    pub title: String,

    /// One-line description for dashboards and search context
    pub short_desc: String,

    /// Detailed multi-line instructions for the step
    pub full_desc: String,

    /// Current status of the step
    #[serde(default)]
    pub status: StepStatus,

    /// Difficulty classification of the step
    pub difficulty: Difficulty,

    /// Estimated completion time, free-form (e.g. "25 mins")
    pub estimated_time: String,

    /// Advisory notes, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,

    /// Tools required for the step, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,

    /// Technical specifications relevant to the step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<SpecEntry>,
}

impl Step {
    /// Whether this step has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == StepStatus::Completed
    }
}
