//! Collection wrapper types for displaying session views.
//!
//! This module provides wrapper types that format groups of domain objects
//! with consistent structure and empty-collection handling: the step
//! dashboard, the completion history, and the conversation transcript.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::assistant::Turn;
use crate::models::CompletionRecord;
use crate::tracker::ProgressTracker;

/// Newtype wrapper rendering a tracker's step list as the dashboard view.
///
/// Each step shows its position, status icon, title, difficulty, one-line
/// description, and a lock marker when linear gating has not unlocked it yet.
///
/// # Examples
///
/// ```rust
/// use guidepost_core::{display::Dashboard, Catalog, ProgressTracker};
///
/// # fn example() -> guidepost_core::Result<()> {
/// let catalog = Catalog::from_json(
///     r#"[{"id": "step-1", "title": "Unboxing", "short_desc": "Open the crate.",
///          "full_desc": "Carefully open the main crate.", "difficulty": "beginner",
///          "estimated_time": "10 mins"}]"#,
/// )?;
/// let tracker = ProgressTracker::new(catalog);
/// let output = format!("{}", Dashboard(&tracker));
/// assert!(output.contains("Unboxing"));
/// # Ok(())
/// # }
/// ```
pub struct Dashboard<'a>(pub &'a ProgressTracker);

impl<'a> fmt::Display for Dashboard<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tracker = self.0;
        if tracker.steps().is_empty() {
            return writeln!(f, "No steps in this guide.");
        }

        for (index, step) in tracker.steps().iter().enumerate() {
            // The ID comes from the live step list, so the lookup can not fail.
            let available = tracker.is_available(&step.id).unwrap_or(false);
            let lock = if available { "" } else { " 🔒" };
            let current = if tracker.current_step_id() == Some(step.id.as_str()) {
                " ←"
            } else {
                ""
            };

            writeln!(
                f,
                "{}. {} **{}** [{}]{lock}{current}",
                index + 1,
                step.status.with_icon(),
                step.title,
                step.difficulty.label(),
            )?;
            writeln!(f, "   {} ({})", step.short_desc, step.estimated_time)?;
        }

        writeln!(f)?;
        write!(f, "{}", tracker.summary())
    }
}

/// Newtype wrapper for displaying the completion history.
pub struct History<'a>(pub &'a [CompletionRecord]);

impl<'a> fmt::Display for History<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps completed yet.");
        }

        for record in self.0 {
            writeln!(
                f,
                "- ✓ {} (completed {})",
                record.step_id,
                LocalDateTime(&record.completed_at)
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the conversation transcript.
pub struct Transcript<'a>(pub &'a [Turn]);

impl<'a> fmt::Display for Transcript<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No messages yet.");
        }

        for turn in self.0 {
            write!(f, "{turn}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Turn;
    use crate::catalog::Catalog;
    use crate::models::{Difficulty, Step, StepStatus};
    use jiff::Timestamp;

    fn tracker_with(ids: &[&str]) -> ProgressTracker {
        let steps = ids
            .iter()
            .map(|id| Step {
                id: (*id).to_string(),
                title: format!("Step {id}"),
                short_desc: "short".to_string(),
                full_desc: "full".to_string(),
                status: StepStatus::Pending,
                difficulty: Difficulty::Beginner,
                estimated_time: "5 mins".to_string(),
                tips: vec![],
                tools: vec![],
                specs: vec![],
            })
            .collect();
        ProgressTracker::new(Catalog::new(steps).unwrap())
    }

    #[test]
    fn test_dashboard_marks_locked_steps() {
        let tracker = tracker_with(&["a", "b"]);
        let output = format!("{}", Dashboard(&tracker));

        assert!(output.contains("1. ○ Pending **Step a**"));
        assert!(!output.lines().next().unwrap().contains('🔒'));
        assert!(output.contains("2. ○ Pending **Step b**"));
        assert!(output.contains('🔒'));
    }

    #[test]
    fn test_dashboard_unlocks_after_completion() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.complete_step("a").unwrap();
        let output = format!("{}", Dashboard(&tracker));

        assert!(!output.contains('🔒'));
        assert!(output.contains("✓ Completed **Step a**"));
        assert!(output.contains("1/2 steps completed (50%)"));
    }

    #[test]
    fn test_dashboard_marks_current_step() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.select_step("a").unwrap();
        let output = format!("{}", Dashboard(&tracker));

        assert!(output.contains("➤ In Progress **Step a** [Beginner] ←"));
    }

    #[test]
    fn test_dashboard_empty_guide() {
        let tracker = tracker_with(&[]);
        assert_eq!(format!("{}", Dashboard(&tracker)), "No steps in this guide.\n");
    }

    #[test]
    fn test_history_display() {
        let records = vec![CompletionRecord {
            step_id: "step-1".to_string(),
            completed_at: Timestamp::from_second(1640995200).unwrap(),
        }];
        let output = format!("{}", History(&records));
        assert!(output.contains("✓ step-1 (completed"));

        assert_eq!(format!("{}", History(&[])), "No steps completed yet.\n");
    }

    #[test]
    fn test_transcript_display() {
        let turns = vec![Turn::user("How tight?"), Turn::assistant("15 Nm.")];
        let output = format!("{}", Transcript(&turns));
        assert!(output.contains("**You**: How tight?"));
        assert!(output.contains("**Assistant**: 15 Nm."));

        assert_eq!(format!("{}", Transcript(&[])), "No messages yet.\n");
    }
}
