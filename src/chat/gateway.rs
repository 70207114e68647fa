use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_TEMPERATURE: f32 = 0.0;
const MAX_TEMPERATURE: f32 = 2.0;

/// One completion call: a system instruction, a user prompt and fixed sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub user_prompt: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: Option<f32>,
}

impl CompletionRequest {
    /// Temperatures outside `[0, 2]` are clamped into range.
    pub fn new(
        system_instruction: impl Into<String>,
        user_prompt: impl Into<String>,
        model_id: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        let clamped = temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
        if clamped != temperature {
            warn!("temperature {temperature} out of range, using {clamped}");
        }

        Self {
            system_instruction: system_instruction.into(),
            user_prompt: user_prompt.into(),
            model_id: model_id.into(),
            max_tokens,
            temperature: clamped,
            top_p: None,
        }
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Text of the first choice, trimmed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Every call is a single attempt: no retries, no backoff, and the transport's
/// default timeout.
pub struct Gateway {
    api_key: String,
    endpoint: String,
    client: reqwest::Client,
}

impl Gateway {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for Gateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        info!(
            "calling completion service (model: {}, max tokens: {}, temperature: {})",
            request.model_id, request.max_tokens, request.temperature
        );
        debug!("prompt length: {} characters", request.user_prompt.len());

        let body = ChatRequest {
            model: &request.model_id,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| ServiceError::Malformed(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::Malformed("response has no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| ServiceError::Malformed("first choice has no content".to_string()))?;

        debug!("completion length: {} characters", content.len());
        Ok(content.trim().to_string())
    }
}
