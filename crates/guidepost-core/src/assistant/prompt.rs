//! Prompt composition for the assistant collaborator.
//!
//! All context passed to the collaborator is snapshotted into plain strings
//! here, at call time, so an in-flight request can never observe a session
//! mutation.

use serde::Serialize;

use crate::models::Step;

/// Context string when no step is selected.
const BROWSING_CONTEXT: &str = "The user is browsing the installation guide.";

/// Build the context string for the current step, if any.
pub fn step_context(current_step: Option<&Step>) -> String {
    match current_step {
        Some(step) => format!(
            "The user is currently on step: \"{}\". Description: {}. Expected tools: {}.",
            step.title,
            step.full_desc,
            step.tools.join(", ")
        ),
        None => BROWSING_CONTEXT.to_string(),
    }
}

/// Compose the troubleshooting prompt for a user question.
///
/// Role framing and tone directive are fixed; the context string and the
/// verbatim question vary per call.
pub fn troubleshoot(query: &str, context: &str) -> String {
    format!(
        "You are an expert technical assistant for a complex hardware installation guide.\n\
         Context: {context}\n\
         User Question: \"{query}\"\n\
         \n\
         Provide a concise, helpful, and safety-first response. Use bullet points if necessary.\n\
         If you don't know the specific answer, suggest checking the connections or contacting support."
    )
}

/// Compact step record embedded in the search prompt.
///
/// Only id, title, and the one-line description go over the wire, to limit
/// context size.
#[derive(Serialize)]
struct SearchEntry<'a> {
    id: &'a str,
    title: &'a str,
    desc: &'a str,
}

/// Compose the step-search prompt for a free-text query.
pub fn search(query: &str, steps: &[Step]) -> String {
    let entries: Vec<SearchEntry<'_>> = steps
        .iter()
        .map(|step| SearchEntry {
            id: &step.id,
            title: &step.title,
            desc: &step.short_desc,
        })
        .collect();
    // A Vec of string-only fields can not fail to serialize.
    let listing = serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Given this list of installation steps: {listing}\n\
         The user is searching for: \"{query}\"\n\
         Identify the most relevant step IDs. Return only a JSON array of step IDs."
    )
}
