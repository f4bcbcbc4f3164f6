//! Command-line argument definitions using clap.
//!
//! CLI argument structs stay in this module and convert into the core
//! parameter types via `From`, keeping clap-specific concerns (help text,
//! flags, aliases) out of the domain layer.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use guidepost_core::params::{AskAssistant, SearchQuery, StepRef};

/// Main command-line interface for the Guidepost installation wizard
///
/// Guidepost walks you through an ordered installation guide: steps unlock
/// one after another as you complete them, and a built-in assistant answers
/// questions in the context of the step you are on. Without a subcommand it
/// opens the interactive guided session.
#[derive(Parser)]
#[command(version, about, name = "gp")]
pub struct Args {
    /// Path to a JSON step catalog. Defaults to the built-in installation
    /// guide
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Guidepost CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive guided session
    #[command(alias = "g")]
    Guide,
    /// Show the step dashboard
    #[command(alias = "ls")]
    List,
    /// Show the full card for one step
    Show(ShowArgs),
    /// Ask the assistant a question
    Ask(AskArgs),
    /// Search for steps with the assistant
    Search(SearchArgs),
}

/// Show details of a specific step
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the step to display
    #[arg(help = "Unique identifier of the step to show details for")]
    pub id: String,
}

impl From<ShowArgs> for StepRef {
    fn from(val: ShowArgs) -> Self {
        StepRef { id: val.id }
    }
}

/// Ask the assistant a free-text question
///
/// Outside the interactive session there is no current step, so the question
/// is answered with the generic browsing context.
#[derive(ClapArgs)]
pub struct AskArgs {
    /// The question to ask, as one or more words
    #[arg(required = true, trailing_var_arg = true)]
    pub question: Vec<String>,
}

impl From<AskArgs> for AskAssistant {
    fn from(val: AskArgs) -> Self {
        AskAssistant {
            question: val.question.join(" "),
        }
    }
}

/// Search the guide for steps matching a free-text query
#[derive(ClapArgs)]
pub struct SearchArgs {
    /// The search query, as one or more words
    #[arg(required = true, trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl From<SearchArgs> for SearchQuery {
    fn from(val: SearchArgs) -> Self {
        SearchQuery {
            query: val.query.join(" "),
        }
    }
}
