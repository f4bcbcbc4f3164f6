//! Session progress tracker for the installation guide.
//!
//! This module provides the main [`ProgressTracker`] interface: the owner of
//! all session-scoped progress state and the only writer of step statuses.
//!
//! # State Machine
//!
//! Each step moves through `Pending → InProgress → Completed`, where
//! `Completed` is terminal. A step that is never selected stays `Pending`.
//! The tracker additionally maintains:
//!
//! - an insertion-ordered completion log (which step IDs are done, and when)
//! - an optional current-step reference (`None` means the dashboard view)
//! - the derived finished flag (all steps completed)
//!
//! # Availability Gating
//!
//! Gating is purely positional on the catalog order: the first step is always
//! available, and every later step unlocks when its predecessor is completed.
//! The catalog is a linear checklist, not a dependency graph, which keeps
//! every operation O(1)-per-step and the whole state trivially serializable.
//!
//! Note that selection itself does not check availability; gating is the
//! caller's concern at the interaction boundary (matching the dashboard,
//! which only offers unlocked steps).
//!
//! # Usage Examples
//!
//! ```rust
//! use guidepost_core::{Catalog, ProgressTracker};
//!
//! # fn example() -> guidepost_core::Result<()> {
//! let catalog = Catalog::from_json(
//!     r#"[
//!         {"id": "step-1", "title": "Unboxing", "short_desc": "Open the crate.",
//!          "full_desc": "Carefully open the main crate.", "difficulty": "beginner",
//!          "estimated_time": "10 mins"},
//!         {"id": "step-2", "title": "Base Frame", "short_desc": "Attach the legs.",
//!          "full_desc": "Align the corner legs with the chassis.", "difficulty": "beginner",
//!          "estimated_time": "25 mins"}
//!     ]"#,
//! )?;
//! let mut tracker = ProgressTracker::new(catalog);
//!
//! tracker.select_step("step-1")?;
//! tracker.complete_step("step-1")?;
//! assert!(tracker.is_available("step-2")?);
//! assert!(!tracker.is_finished());
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;

use crate::{
    catalog::Catalog,
    error::{GuideError, Result},
    models::{CompletionRecord, ProgressSummary, Step, StepStatus},
};


/// Owner of all session progress state for one guide run.
///
/// Single-writer by design: every mutation goes through `&mut self`, all
/// operations are synchronous and atomic, and no partial-update state is ever
/// observable.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    /// Immutable source catalog; reset re-derives live state from it
    catalog: Catalog,
    /// Live step sequence with status overlay
    steps: Vec<Step>,
    /// Insertion-ordered completion log
    completions: Vec<CompletionRecord>,
    /// Currently selected step, or `None` for the dashboard view
    current_step_id: Option<String>,
}

impl ProgressTracker {
    /// Creates a tracker with a fresh session over the given catalog.
    ///
    /// All steps start `Pending`, the completion log is empty, and no step is
    /// selected.
    pub fn new(catalog: Catalog) -> Self {
        let steps = catalog.steps().to_vec();
        Self {
            catalog,
            steps,
            completions: Vec::new(),
            current_step_id: None,
        }
    }

    /// The live step sequence, in canonical catalog order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Looks up a live step by ID.
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// ID of the currently selected step, if any.
    pub fn current_step_id(&self) -> Option<&str> {
        self.current_step_id.as_deref()
    }

    /// The currently selected step, resolved against the live sequence.
    pub fn current_step(&self) -> Option<&Step> {
        self.current_step_id
            .as_deref()
            .and_then(|id| self.step(id))
    }

    /// Completed step IDs in completion order.
    pub fn completed_step_ids(&self) -> Vec<&str> {
        self.completions
            .iter()
            .map(|record| record.step_id.as_str())
            .collect()
    }

    /// The completion log, in completion order.
    pub fn completions(&self) -> &[CompletionRecord] {
        &self.completions
    }

    /// Whether every step in the guide has been completed.
    ///
    /// Derived on every read from the completion count, never stored, so it
    /// can not go stale or drift off by one.
    pub fn is_finished(&self) -> bool {
        self.completions.len() == self.steps.len()
    }

    /// Completion percentage in the range `0.0..=100.0`.
    pub fn progress(&self) -> f64 {
        self.summary().percent()
    }

    /// Selects a step, making it the current step.
    ///
    /// A `Pending` step transitions to `InProgress`; selecting a step that is
    /// already `InProgress` or `Completed` never downgrades its status.
    /// Selection is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::StepNotFound` if the ID is not in the catalog.
    pub fn select_step(&mut self, id: &str) -> Result<&Step> {
        let index = self
            .catalog
            .index_of(id)
            .ok_or_else(|| GuideError::step_not_found(id))?;

        self.current_step_id = Some(id.to_string());
        if self.steps[index].status == StepStatus::Pending {
            self.steps[index].status = StepStatus::InProgress;
        }

        self.assert_invariants();
        Ok(&self.steps[index])
    }

    /// Marks a step as completed.
    ///
    /// Returns `Ok(true)` if the step was newly completed and `Ok(false)` if
    /// it was already complete (idempotent no-op). Completion order is
    /// preserved in the log.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::StepNotFound` if the ID is not in the catalog.
    pub fn complete_step(&mut self, id: &str) -> Result<bool> {
        let index = self
            .catalog
            .index_of(id)
            .ok_or_else(|| GuideError::step_not_found(id))?;

        if self.completions.iter().any(|record| record.step_id == id) {
            return Ok(false);
        }

        self.completions.push(CompletionRecord {
            step_id: id.to_string(),
            completed_at: Timestamp::now(),
        });
        self.steps[index].status = StepStatus::Completed;

        self.assert_invariants();
        Ok(true)
    }

    /// Moves the session to the step after the current one.
    ///
    /// Selects and returns the next step in catalog order. From the last
    /// step, or when no step is selected, clears the current step and returns
    /// `None` (back to the dashboard).
    pub fn advance(&mut self) -> Option<&Step> {
        let next_id = self
            .current_step_id
            .as_deref()
            .and_then(|id| self.catalog.index_of(id))
            .and_then(|index| self.catalog.steps().get(index + 1))
            .map(|step| step.id.clone());

        match next_id {
            // The ID came from the catalog, so selection can not fail.
            Some(id) => self.select_step(&id).ok(),
            None => {
                self.current_step_id = None;
                None
            }
        }
    }

    /// Returns to the dashboard view.
    ///
    /// Clears the current step without touching any status; the host's back
    /// action.
    pub fn deselect(&mut self) {
        self.current_step_id = None;
    }

    /// Whether a step is currently unlockable.
    ///
    /// The first step is always available; any later step is available iff
    /// its predecessor in catalog order has been completed. Strict linear
    /// gating — status alone never unlocks a step out of order.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::StepNotFound` if the ID is not in the catalog.
    pub fn is_available(&self, id: &str) -> Result<bool> {
        let index = self
            .catalog
            .index_of(id)
            .ok_or_else(|| GuideError::step_not_found(id))?;

        if index == 0 {
            return Ok(true);
        }

        let previous_id = &self.catalog.steps()[index - 1].id;
        Ok(self
            .completions
            .iter()
            .any(|record| &record.step_id == previous_id))
    }

    /// Restarts the session.
    ///
    /// Re-derives every step from the immutable catalog (all `Pending`),
    /// clears the completion log and the current step. The resulting state is
    /// observationally identical to a freshly constructed tracker.
    pub fn reset(&mut self) {
        self.steps = self.catalog.steps().to_vec();
        self.completions.clear();
        self.current_step_id = None;
    }

    /// Snapshot of session progress for display.
    pub fn summary(&self) -> ProgressSummary {
        let total_steps = self.steps.len() as u32;
        let completed_steps = self.completions.len() as u32;
        ProgressSummary {
            total_steps,
            completed_steps,
            remaining_steps: total_steps - completed_steps,
            current_step_id: self.current_step_id.clone(),
            finished: self.is_finished(),
        }
    }

    /// Internal consistency checks; violations are programming errors.
    fn assert_invariants(&self) {
        debug_assert!(
            self.completions
                .iter()
                .all(|record| self.catalog.index_of(&record.step_id).is_some()),
            "completion log references a step not in the catalog"
        );
        debug_assert!(
            self.steps.iter().all(|step| {
                let recorded = self
                    .completions
                    .iter()
                    .any(|record| record.step_id == step.id);
                recorded == (step.status == StepStatus::Completed)
            }),
            "step status disagrees with the completion log"
        );
    }
}
