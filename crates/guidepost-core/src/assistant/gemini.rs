//! Gemini API client implementation.
//!
//! Implements the [`TextGenerator`] trait against the Gemini `generateContent`
//! REST endpoint, with bounded retries for transient failures.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use super::{
    client::{GenerationRequest, TextGenerator},
    config::AssistantConfig,
    error::{is_retryable_status, AssistantError},
};

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 500;

/// Gemini generateContent API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new client from configuration.
    ///
    /// Reads the API key from the environment variable named in the config.
    /// A missing key is tolerated here; the resulting requests fail at the
    /// collaborator and are absorbed by the gateway.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Network` if the HTTP client can not be built.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(AssistantError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key: config.api_key(),
            base_url: config.base_url.clone(),
            http,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Build the request body for the generateContent endpoint
    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": request.prompt }],
            }],
            "generationConfig": {
                "maxOutputTokens": self.max_output_tokens,
            },
        });

        if request.json_output {
            body["generationConfig"]["responseMimeType"] = serde_json::json!("application/json");
        }

        body
    }

    /// Extract the generated text from an API response
    fn parse_response(api_response: GeminiResponse) -> Result<String, AssistantError> {
        let text: String = api_response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            Err(AssistantError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = self.build_request_body(&request);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!("generate: retrying after transient error (attempt {attempt}, backoff {backoff}ms)");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(url.clone())
                .header("x-goog-api-key", self.api_key.clone())
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    debug!("generate: network error on attempt {attempt}: {e}");
                    last_error = Some(AssistantError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!("generate: retryable status {status} on attempt {attempt}");
                last_error = Some(AssistantError::Api {
                    status,
                    message: text,
                });
                continue;
            }

            if !response.status().is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(AssistantError::Api {
                    status,
                    message: text,
                });
            }

            let api_response: GeminiResponse = response.json().await?;
            return Self::parse_response(api_response);
        }

        Err(last_error.unwrap_or(AssistantError::EmptyResponse))
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
