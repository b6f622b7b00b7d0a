use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use smartspace_ai::{GenerationError, TextGenerator};

use crate::config::LlmSettings;

/// Client for an OpenAI-compatible `chat/completions` endpoint.
///
/// Blocking, one request per call, bounded by `LlmSettings::timeout`. No retry.
#[derive(Debug, Clone)]
pub struct ChatCompletionsGenerator {
    settings: LlmSettings,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsGenerator {
    pub fn new(settings: LlmSettings) -> Result<Self, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { settings, client })
    }
}

fn map_send_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Transport(e.to_string())
    }
}

impl TextGenerator for ChatCompletionsGenerator {
    fn name(&self) -> &str {
        &self.settings.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.settings.model))]
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .map_err(map_send_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "chat completion response received");

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => GenerationError::Unauthorized(body),
                429 => GenerationError::QuotaExceeded(body),
                code => GenerationError::Status { status: code, body },
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}
