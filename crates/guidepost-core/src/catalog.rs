//! Immutable, ordered step catalog supplied at session start.
//!
//! The catalog is the external content interface of the guide: an ordered
//! sequence of [`Step`] records whose order is the canonical step sequence
//! used for availability gating and "next" navigation. A catalog is validated
//! once at construction and never mutated; live session state is derived from
//! it by the [`crate::tracker::ProgressTracker`].

use crate::{
    error::{GuideError, Result},
    models::{Step, StepStatus},
};

/// A validated, ordered collection of guide steps.
///
/// Invariant: step IDs are unique. Every step in a catalog is `Pending`;
/// status is a session concern, not catalog content.
///
/// # Examples
///
/// ```rust
/// use guidepost_core::Catalog;
///
/// let catalog = Catalog::from_json(
///     r#"[{
///         "id": "step-1",
///         "title": "Unboxing & Inventory",
///         "short_desc": "Verify all components and tools are ready.",
///         "full_desc": "Carefully open the main crate.",
///         "difficulty": "beginner",
///         "estimated_time": "10 mins"
///     }]"#,
/// )?;
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.index_of("step-1"), Some(0));
/// # Ok::<(), guidepost_core::GuideError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    steps: Vec<Step>,
}

impl Catalog {
    /// Creates a catalog from an ordered step sequence.
    ///
    /// Any status carried by the input is discarded; catalog steps are
    /// always `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::InvalidInput` if two steps share an ID.
    pub fn new(mut steps: Vec<Step>) -> Result<Self> {
        for (index, step) in steps.iter().enumerate() {
            if steps[..index].iter().any(|other| other.id == step.id) {
                return Err(GuideError::invalid_input(
                    "id",
                    format!("duplicate step ID '{}'", step.id),
                ));
            }
        }

        for step in &mut steps {
            step.status = StepStatus::Pending;
        }

        Ok(Self { steps })
    }

    /// Parses a catalog from a JSON array of step records.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::Catalog` if the input is not a valid step array,
    /// or `GuideError::InvalidInput` if step IDs are not unique.
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<Step> = serde_json::from_str(json)
            .map_err(|e| GuideError::catalog("failed to parse step catalog", e))?;
        Self::new(steps)
    }

    /// The ordered step sequence.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps in the catalog.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the catalog contains no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Looks up a step by ID.
    pub fn get(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Position of a step in the canonical order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn step(id: &str) -> Step {
        Step {
            id: id.to_string(),
            title: format!("Step {id}"),
            short_desc: "short".to_string(),
            full_desc: "full".to_string(),
            status: StepStatus::Pending,
            difficulty: Difficulty::Beginner,
            estimated_time: "5 mins".to_string(),
            tips: vec![],
            tools: vec![],
            specs: vec![],
        }
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![step("a"), step("b"), step("c")]).unwrap();
        assert_eq!(catalog.index_of("a"), Some(0));
        assert_eq!(catalog.index_of("b"), Some(1));
        assert_eq!(catalog.index_of("c"), Some(2));
        assert_eq!(catalog.index_of("missing"), None);
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![step("a"), step("b"), step("a")]);
        match result {
            Err(GuideError::InvalidInput { field, reason }) => {
                assert_eq!(field, "id");
                assert!(reason.contains("'a'"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_resets_carried_status() {
        let mut started = step("a");
        started.status = StepStatus::InProgress;
        let catalog = Catalog::new(vec![started]).unwrap();
        assert_eq!(catalog.steps()[0].status, StepStatus::Pending);
    }

    #[test]
    fn test_catalog_from_json_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(GuideError::Catalog { .. })
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"id": "step-1"}"#),
            Err(GuideError::Catalog { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
