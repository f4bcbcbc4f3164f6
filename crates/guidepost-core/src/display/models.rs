//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation
//! of concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use crate::assistant::{Turn, TurnRole};
use crate::models::{Difficulty, ProgressSummary, Step, StepStatus};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Step {
    /// Format the full step card.
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Difficulty: {}", self.difficulty.label())?;
        writeln!(f, "- Estimated time: {}", self.estimated_time)?;
        writeln!(f)?;

        writeln!(f, "{}", self.full_desc)?;

        if !self.tips.is_empty() {
            writeln!(f, "\n#### Tips")?;
            writeln!(f)?;
            for tip in &self.tips {
                writeln!(f, "- {tip}")?;
            }
        }

        if !self.tools.is_empty() {
            writeln!(f, "\n#### Tools")?;
            writeln!(f)?;
            for tool in &self.tools {
                writeln!(f, "- {tool}")?;
            }
        }

        if !self.specs.is_empty() {
            writeln!(f, "\n#### Specs")?;
            writeln!(f)?;
            for spec in &self.specs {
                writeln!(f, "- **{}**: {}", spec.label, spec.value)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f)
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.finished {
            writeln!(
                f,
                "**Installation complete**: all {} steps done.",
                self.total_steps
            )?;
        } else {
            writeln!(
                f,
                "Progress: {}/{} steps completed ({:.0}%)",
                self.completed_steps,
                self.total_steps,
                self.percent()
            )?;
        }

        if let Some(id) = &self.current_step_id {
            writeln!(f, "Current step: {id}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speaker = match self.role {
            TurnRole::User => "You",
            TurnRole::Assistant => "Assistant",
        };
        writeln!(f, "**{speaker}**: {}", self.content)
    }
}
