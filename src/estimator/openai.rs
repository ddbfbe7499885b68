use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{MenuNutritionError, Result};
use crate::estimator::prompt;
use crate::models::NutritionRecord;

/// Completion model used for estimates.
pub const MODEL: &str = "gpt-3.5-turbo-0125";

/// Sampling temperature: low but nonzero, favoring consistent output.
pub const TEMPERATURE: f32 = 0.4;

/// Upper bound on completion length.
pub const MAX_TOKENS: u32 = 1024;

/// Nucleus sampling cutoff.
pub const TOP_P: f32 = 0.9;

/// Mild penalty on repeated tokens.
pub const FREQUENCY_PENALTY: f32 = 0.1;

/// Mild penalty on repeated topics.
pub const PRESENCE_PENALTY: f32 = 0.1;

/// Chat-completions API root.
pub const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Timeout for establishing the connection.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Timeout for the full completion round trip.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Produces a nutrition estimate for a single item name.
pub trait NutritionEstimator {
    fn estimate(&self, item: &str) -> Result<NutritionRecord>;
}

/// One turn of a chat-completions conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Chat-completions client that prompts for nutrition facts.
///
/// The priming transcript is built once at construction; each call
/// appends only the live item turn.
pub struct OpenAiEstimator {
    api_key: String,
    base_url: String,
    transcript: Vec<ChatMessage>,
    client: reqwest::blocking::Client,
}

impl OpenAiEstimator {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: API_BASE_URL.to_string(),
            transcript: prompt::priming_transcript(),
            client,
        })
    }

    /// Point the client at a different API root (proxies, self-hosted
    /// compatible servers).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl NutritionEstimator for OpenAiEstimator {
    fn estimate(&self, item: &str) -> Result<NutritionRecord> {
        let url = format!("{}/chat/completions", self.base_url);
        let mut messages = self.transcript.clone();
        messages.push(ChatMessage::user(item));

        let body = CompletionRequest {
            model: MODEL,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        };

        debug!(item, model = MODEL, "requesting nutrition estimate");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MenuNutritionError::EstimatorService {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response.json()?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| MenuNutritionError::MalformedEstimate {
                item: item.to_string(),
                detail: "response contained no completion choices".to_string(),
            })?;

        debug!(item, %content, "received nutrition estimate");
        parse_estimate(item, &content)
    }
}

/// Strictly decode a completion into a nutrition record.
///
/// The whole trimmed completion must be exactly one JSON object of the
/// expected shape; surrounding prose, truncation, or a mistyped field is
/// an error naming the item.
pub fn parse_estimate(item: &str, completion: &str) -> Result<NutritionRecord> {
    serde_json::from_str(completion.trim()).map_err(|e| MenuNutritionError::MalformedEstimate {
        item: item.to_string(),
        detail: e.to_string(),
    })
}
