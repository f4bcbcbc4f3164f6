//! Guidepost CLI Application
//!
//! Command-line host for the Guidepost installation wizard: one in-memory
//! session per process, driven either by one-shot commands or by the
//! interactive guided session.

mod args;
mod cli;
mod renderer;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use guidepost_core::{
    AssistantConfig, AssistantGateway, Catalog, GeminiClient, GuideError, ProgressTracker,
};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

/// The built-in hardware installation guide, compiled into the binary.
const DEFAULT_GUIDE: &str = include_str!("../guides/installation.json");

/// Load the step catalog from a file, or fall back to the built-in guide.
fn load_catalog(path: Option<PathBuf>) -> guidepost_core::Result<Catalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|source| GuideError::FileSystem { path, source })?;
            Catalog::from_json(&json)
        }
        None => Catalog::from_json(DEFAULT_GUIDE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { catalog, no_color, command } = Args::parse();

    let catalog = load_catalog(catalog).context("Failed to load step catalog")?;
    let tracker = ProgressTracker::new(catalog);

    let generator = GeminiClient::from_config(&AssistantConfig::default())
        .context("Failed to initialize assistant client")?;
    let gateway = AssistantGateway::new(Box::new(generator));

    let renderer = TerminalRenderer::new(!no_color);

    info!("Guidepost started");

    let mut cli = Cli::new(tracker, gateway, renderer);
    match command {
        Some(List) => cli.list_steps(),
        Some(Show(step_args)) => cli.show_step(&step_args.into())?,
        Some(Ask(ask_args)) => cli.ask(&ask_args.into()).await,
        Some(Search(search_args)) => cli.search(&search_args.into()).await,
        Some(Guide) | None => cli.run_session().await?,
    }
    Ok(())
}
