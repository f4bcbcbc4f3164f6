//! Status and difficulty enumerations for guide steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step statuses.
///
/// A step moves `Pending → InProgress → Completed` and never back; a step
/// that is never selected stays `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step has not been started
    #[default]
    Pending,

    /// Step is being worked on
    InProgress,

    /// Step has been completed
    Completed,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "inprogress" | "in_progress" => Ok(StepStatus::InProgress),
            "completed" => Ok(StepStatus::Completed),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "inprogress",
            StepStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name. This method ensures consistent visual representation across
    /// all display contexts.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for completed steps
    /// - `➤ In Progress` - Arrow for active steps
    /// - `○ Pending` - Circle for pending steps
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guidepost_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✓ Completed",
            StepStatus::InProgress => "➤ In Progress",
            StepStatus::Pending => "○ Pending",
        }
    }
}

/// Type-safe enumeration of step difficulty classifications.
///
/// Difficulty is fixed catalog metadata; the tracker never reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for first-time installers
    Beginner,

    /// Requires prior experience with the hardware
    Expert,

    /// Short, low-risk adjustment
    #[serde(rename = "quickfix")]
    QuickFix,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "expert" => Ok(Difficulty::Expert),
            "quickfix" | "quick_fix" => Ok(Difficulty::QuickFix),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Expert => "expert",
            Difficulty::QuickFix => "quickfix",
        }
    }

    /// Human-readable label for badges and step cards.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Expert => "Expert",
            Difficulty::QuickFix => "Quick Fix",
        }
    }
}
