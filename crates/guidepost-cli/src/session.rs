//! Interactive guided session.
//!
//! A rustyline-driven loop that walks the user through the installation
//! guide one step at a time. The session is the host of the core components:
//! it enforces availability gating at the `start` boundary and serializes
//! assistant calls by awaiting each answer before reading the next command.

use anyhow::Result;
use colored::Colorize;
use guidepost_core::{
    display::{Dashboard, History, Transcript},
    AssistantGateway, ProgressTracker,
};
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::renderer::TerminalRenderer;

/// Interactive wizard session over one tracker and one gateway.
pub struct GuideSession {
    tracker: ProgressTracker,
    gateway: AssistantGateway,
    renderer: TerminalRenderer,
}

/// What the loop should do after handling a command.
enum CommandResult {
    Continue,
    Quit,
}

impl GuideSession {
    /// Create a new guided session.
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

    /// Run the session main loop.
    pub async fn run(mut self) -> Result<()> {
        self.print_welcome();
        self.renderer.render(&format!("{}", Dashboard(&self.tracker)));

        let mut rl = DefaultEditor::new()?;

        loop {
            let readline = rl.readline(&format!("{} ", "guide>".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    match self.handle_command(input).await {
                        CommandResult::Continue => continue,
                        CommandResult::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show a new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Guidepost Installation Wizard".bright_cyan().bold());
        println!(
            "Type {} for commands, {} to exit",
            "help".yellow(),
            "quit".yellow()
        );
        println!();
    }

    /// Dispatch one command line.
    async fn handle_command(&mut self, input: &str) -> CommandResult {
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };
        debug!("session command: {command}");

        match command {
            "list" | "ls" => {
                self.renderer.render(&format!("{}", Dashboard(&self.tracker)));
            }
            "show" => self.show(rest),
            "start" => self.start(rest),
            "done" => self.done(rest),
            "next" => self.next(),
            "back" => {
                self.tracker.deselect();
                self.renderer.render(&format!("{}", Dashboard(&self.tracker)));
            }
            "ask" => self.ask(rest).await,
            "search" => self.search(rest).await,
            "chat" => {
                self.renderer
                    .render(&format!("{}", Transcript(self.gateway.transcript())));
            }
            "history" => {
                self.renderer
                    .render(&format!("{}", History(self.tracker.completions())));
            }
            "reset" => {
                self.tracker.reset();
                self.gateway.clear_transcript();
                println!("{}", "Session restarted.".dimmed());
            }
            "help" | "h" => self.print_help(),
            "quit" | "q" | "exit" => return CommandResult::Quit,
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), command);
                println!("Type {} for available commands", "help".yellow());
            }
        }
        CommandResult::Continue
    }

    /// Show a step card; with no argument, the current step.
    fn show(&self, id: &str) {
        let step = if id.is_empty() {
            self.tracker.current_step()
        } else {
            self.tracker.step(id)
        };

        match step {
            Some(step) => self.renderer.render(&format!("{step}")),
            None if id.is_empty() => println!("{}", "No step selected.".dimmed()),
            None => println!("{} Unknown step: {}", "?".yellow(), id),
        }
    }

    /// Begin working on a step, enforcing linear gating.
    fn start(&mut self, id: &str) {
        if id.is_empty() {
            println!("Usage: start <step-id>");
            return;
        }

        match self.tracker.is_available(id) {
            Ok(true) => {
                // Availability implies the ID is valid, so this can not fail.
                if let Ok(step) = self.tracker.select_step(id) {
                    self.renderer.render(&format!("{step}"));
                }
            }
            Ok(false) => {
                println!(
                    "{} Step '{}' is locked. Complete the previous step first.",
                    "🔒".yellow(),
                    id
                );
            }
            Err(e) => println!("{} {}", "?".yellow(), e),
        }
    }

    /// Mark a step complete; with no argument, the current step.
    fn done(&mut self, id: &str) {
        let id = if id.is_empty() {
            match self.tracker.current_step_id() {
                Some(current) => current.to_string(),
                None => {
                    println!("{}", "No step selected. Usage: done [step-id]".dimmed());
                    return;
                }
            }
        } else {
            id.to_string()
        };

        match self.tracker.complete_step(&id) {
            Ok(true) => {
                println!("{} Step '{}' completed.", "✓".green(), id);
                if self.tracker.is_finished() {
                    self.renderer.render(&format!("{}", self.tracker.summary()));
                } else {
                    println!("Type {} to continue.", "next".yellow());
                }
            }
            Ok(false) => println!("{}", format!("Step '{id}' was already complete.").dimmed()),
            Err(e) => println!("{} {}", "?".yellow(), e),
        }
    }

    /// Move to the next step in guide order.
    fn next(&mut self) {
        let next_id = self.tracker.advance().map(|step| step.id.clone());
        match next_id {
            Some(id) => self.show(&id),
            None => {
                self.renderer.render(&format!("{}", Dashboard(&self.tracker)));
            }
        }
    }

    /// Ask the assistant, with the current step as context.
    ///
    /// Awaiting the answer before returning to the prompt is what keeps
    /// user/assistant turn pairs from interleaving.
    async fn ask(&mut self, question: &str) {
        // Snapshot to end the tracker borrow before the gateway call.
        let current_step = self.tracker.current_step().cloned();
        match self
            .gateway
            .troubleshoot(question, current_step.as_ref())
            .await
        {
            Some(answer) => self.renderer.line(&format!("**Assistant**: {answer}")),
            None => println!("Usage: ask <question>"),
        }
    }

    /// Search the guide and show the matching steps.
    async fn search(&mut self, query: &str) {
        if query.is_empty() {
            println!("Usage: search <query>");
            return;
        }

        let ids = self.gateway.search_steps(query, self.tracker.steps()).await;
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

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:18} Show the step dashboard", "list".yellow());
        println!("  {:18} Show a step card (default: current)", "show [id]".yellow());
        println!("  {:18} Begin an unlocked step", "start <id>".yellow());
        println!("  {:18} Mark a step complete (default: current)", "done [id]".yellow());
        println!("  {:18} Move to the next step", "next".yellow());
        println!("  {:18} Return to the dashboard", "back".yellow());
        println!("  {:18} Ask the assistant about the current step", "ask <question>".yellow());
        println!("  {:18} Find steps matching a query", "search <query>".yellow());
        println!("  {:18} Show the assistant conversation", "chat".yellow());
        println!("  {:18} Show completed steps", "history".yellow());
        println!("  {:18} Restart the session", "reset".yellow());
        println!("  {:18} Exit", "quit".yellow());
        println!();
    }
}
