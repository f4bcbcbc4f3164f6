use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use guidepost_core::{
    assistant::{
        AssistantGateway, AssistantError, GenerationRequest, TextGenerator, TurnRole,
        EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK,
    },
    Catalog, ProgressTracker,
};

/// Collaborator double driven by a queue of canned outcomes.
struct CannedCollaborator {
    replies: Mutex<Vec<Result<String, u16>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl CannedCollaborator {
    fn new(replies: Vec<Result<String, u16>>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                replies: Mutex::new(replies),
                prompts: Arc::clone(&prompts),
            },
            prompts,
        )
    }
}

#[async_trait]
impl TextGenerator for CannedCollaborator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AssistantError> {
        self.prompts.lock().unwrap().push(request.prompt);
        let mut replies = self.replies.lock().unwrap();
        match replies.remove(0) {
            Ok(text) => Ok(text),
            Err(status) => Err(AssistantError::Api {
                status,
                message: "canned failure".to_string(),
            }),
        }
    }
}

fn create_test_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {
                "id": "core",
                "title": "Core Module Insertion",
                "short_desc": "Slide the electronic core into the housing.",
                "full_desc": "Slide the module into the center rails until you hear a click.",
                "difficulty": "expert",
                "estimated_time": "15 mins",
                "tools": ["None (Slide mechanism)"]
            },
            {
                "id": "wiring",
                "title": "Wiring & Termination",
                "short_desc": "Connect the main harness to the core.",
                "full_desc": "Plug the 24-pin connector into the port labeled B1.",
                "difficulty": "expert",
                "estimated_time": "20 mins",
                "tools": ["Cable Ties"]
            }
        ]"#,
    )
    .expect("test catalog should parse")
}

#[tokio::test]
async fn test_troubleshoot_uses_current_step_context() {
    let mut tracker = ProgressTracker::new(create_test_catalog());
    tracker.select_step("core").expect("step exists");

    let (collaborator, prompts) =
        CannedCollaborator::new(vec![Ok("Check the guide rails for debris.".to_string())]);
    let mut gateway = AssistantGateway::new(Box::new(collaborator));

    let answer = gateway
        .troubleshoot("The module will not slide in.", tracker.current_step())
        .await;
    assert_eq!(answer.as_deref(), Some("Check the guide rails for debris."));

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"Core Module Insertion\""));
    assert!(prompts[0].contains("None (Slide mechanism)"));
    assert!(prompts[0].contains("The module will not slide in."));
}

#[tokio::test]
async fn test_troubleshoot_browsing_context_without_selection() {
    let tracker = ProgressTracker::new(create_test_catalog());

    let (collaborator, prompts) = CannedCollaborator::new(vec![Ok("Sure.".to_string())]);
    let mut gateway = AssistantGateway::new(Box::new(collaborator));

    gateway
        .troubleshoot("Where do I start?", tracker.current_step())
        .await;

    let prompts = prompts.lock().unwrap();
    assert!(prompts[0].contains("browsing the installation guide"));
}

#[tokio::test]
async fn test_failed_call_leaves_paired_turns_and_fallback() {
    let (collaborator, _prompts) = CannedCollaborator::new(vec![Err(504)]);
    let mut gateway = AssistantGateway::new(Box::new(collaborator));

    let answer = gateway.troubleshoot("Help!", None).await;
    assert_eq!(answer.as_deref(), Some(ERROR_FALLBACK));

    // Exactly one user turn and one assistant turn, in that order.
    let transcript = gateway.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, TurnRole::User);
    assert_eq!(transcript[0].content, "Help!");
    assert_eq!(transcript[1].role, TurnRole::Assistant);
    assert_eq!(transcript[1].content, ERROR_FALLBACK);
}

#[tokio::test]
async fn test_transcript_accumulates_across_calls() {
    let (collaborator, _prompts) = CannedCollaborator::new(vec![
        Ok("First answer.".to_string()),
        Err(500),
        Ok("".to_string()),
    ]);
    let mut gateway = AssistantGateway::new(Box::new(collaborator));

    gateway.troubleshoot("one", None).await;
    gateway.troubleshoot("two", None).await;
    gateway.troubleshoot("three", None).await;

    let contents: Vec<&str> = gateway
        .transcript()
        .iter()
        .map(|turn| turn.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec![
            "one",
            "First answer.",
            "two",
            ERROR_FALLBACK,
            "three",
            EMPTY_RESPONSE_FALLBACK,
        ]
    );

    gateway.clear_transcript();
    assert!(gateway.transcript().is_empty());
}

#[tokio::test]
async fn test_search_steps_round_trip_against_catalog() {
    let tracker = ProgressTracker::new(create_test_catalog());

    let (collaborator, prompts) =
        CannedCollaborator::new(vec![Ok(r#"["wiring"]"#.to_string())]);
    let mut gateway = AssistantGateway::new(Box::new(collaborator));

    let ids = gateway.search_steps("harness", tracker.steps()).await;
    assert_eq!(ids, vec!["wiring".to_string()]);

    // The search context carries the compact listing, not full descriptions.
    let prompts = prompts.lock().unwrap();
    assert!(prompts[0].contains(r#""id":"wiring""#));
    assert!(!prompts[0].contains("port labeled B1"));

    // No transcript side effect for searches.
    assert!(gateway.transcript().is_empty());
}

#[tokio::test]
async fn test_search_steps_tolerates_garbage_responses() {
    for reply in [
        Ok("not json".to_string()),
        Ok(r#"{"step": "wiring"}"#.to_string()),
        Ok(r#"[1, 2, 3]"#.to_string()),
        Err(429),
    ] {
        let (collaborator, _prompts) = CannedCollaborator::new(vec![reply]);
        let mut gateway = AssistantGateway::new(Box::new(collaborator));
        assert!(gateway.search_steps("wiring", &[]).await.is_empty());
    }
}
