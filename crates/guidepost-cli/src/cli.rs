//! One-shot command handlers.
//!
//! [`Cli`] bundles the session components (tracker, assistant gateway,
//! renderer) and executes a single command against them. One-shot invocations
//! run outside the interactive session, so there is never a current step:
//! questions get the generic browsing context.

use anyhow::Result;
use guidepost_core::{
    display::Dashboard,
    params::{AskAssistant, SearchQuery, StepRef},
    AssistantGateway, ProgressTracker,
};

use crate::renderer::TerminalRenderer;
use crate::session::GuideSession;

/// Command executor bundling the session components.
pub struct Cli {
    tracker: ProgressTracker,
    gateway: AssistantGateway,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI command executor.
    pub fn new(
        tracker: ProgressTracker,
        gateway: AssistantGateway,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            tracker,
            gateway,
            renderer,
        }
    }

    /// Show the step dashboard.
    pub fn list_steps(&self) {
        self.renderer.render(&format!("{}", Dashboard(&self.tracker)));
    }

    /// Show the full card for one step.
    pub fn show_step(&self, params: &StepRef) -> Result<()> {
        let step = self
            .tracker
            .step(&params.id)
            .ok_or_else(|| guidepost_core::GuideError::step_not_found(params.id.clone()))?;
        self.renderer.render(&format!("{step}"));
        Ok(())
    }

    /// Ask the assistant a one-shot question.
    pub async fn ask(&mut self, params: &AskAssistant) {
        match self.gateway.troubleshoot(&params.question, None).await {
            Some(answer) => self.renderer.line(&format!("**Assistant**: {answer}")),
            None => self.renderer.line("Nothing to ask."),
        }
    }

    /// Search the guide for steps matching a query.
    pub async fn search(&mut self, params: &SearchQuery) {
        let ids = self
            .gateway
            .search_steps(&params.query, self.tracker.steps())
            .await;

        // IDs the collaborator hallucinated are dropped at the display edge.
        let matches: Vec<_> = ids
            .iter()
            .filter_map(|id| self.tracker.step(id))
            .collect();

        if matches.is_empty() {
            self.renderer.line("No matching steps.");
            return;
        }

        for step in matches {
            self.renderer
                .line(&format!("- **{}** ({}): {}", step.title, step.id, step.short_desc));
        }
    }

    /// Hand the components over to the interactive guided session.
    pub async fn run_session(self) -> Result<()> {
        GuideSession::new(self.tracker, self.gateway, self.renderer)
            .run()
            .await
    }
}
