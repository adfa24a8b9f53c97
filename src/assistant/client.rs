//! Chat-completions client for OpenAI-compatible endpoints.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::credential::ApiKey;
use super::prompt::{user_message, SYSTEM_PROMPT};
use crate::error::AssistantError;
use crate::traits::{json_bearer_headers, HttpClient, HttpError, Response};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Sends one request per submission and returns the reply text.
#[derive(Clone)]
pub struct CompletionClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl CompletionClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Build the request body for `question` against `document`.
    pub fn request_for(&self, document: &Value, question: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(user_message(document, question)),
            ],
        }
    }

    /// Ask the model about `document`.
    ///
    /// A null message content comes back as an empty string.
    pub async fn complete(
        &self,
        key: &ApiKey,
        document: &Value,
        question: &str,
    ) -> Result<String, AssistantError> {
        let body = serde_json::to_string(&self.request_for(document, question))
            .map_err(|e| AssistantError::MalformedResponse(e.to_string()))?;
        let url = self.endpoint();
        let started = Instant::now();
        tracing::info!(model = %self.model, %url, "sending completion request");

        let response = self
            .http
            .post(&url, &body, &json_bearer_headers(key.expose()))
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "completion request failed"))?;

        if !response.is_success() {
            let err = HttpError::ServerError {
                status: response.status,
                message: error_message(&response),
            };
            tracing::warn!(status = response.status, "completion request rejected");
            return Err(err.into());
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AssistantError::MalformedResponse(e.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AssistantError::MalformedResponse("no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            reply_len = content.len(),
            "completion received"
        );
        Ok(content)
    }
}

/// Provider error text: `error.message` from the JSON envelope, or the raw body.
fn error_message(response: &Response) -> String {
    response
        .json::<ErrorEnvelope>()
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| response.text_lossy())
}
