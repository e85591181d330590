//! LLM Client: the single point of entry for chat-completion calls.
//!
//! Both the proxy handler and the direct-provider client path go through this
//! module, so the prompt, headers and reply cleanup stay identical.
//!
//! Exactly one request per call: no retries and no client-side timeout.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::models::CandidateForm;

pub mod prompts;

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default completion model on OpenRouter.
pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const APP_TITLE: &str = "AI Resume Builder";
const DEFAULT_REFERER: &str = "http://localhost";
const TEMPERATURE: f64 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse AI response")]
    Parse { content: String },
}

/// OpenAI-compatible chat-completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenRouter,
    OpenAi,
}

impl Provider {
    pub fn endpoint(self) -> &'static str {
        match self {
            Provider::OpenRouter => OPENROUTER_API_URL,
            Provider::OpenAi => OPENAI_API_URL,
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::OpenRouter => DEFAULT_OPENROUTER_MODEL,
            Provider::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }
}

/// Everything needed to talk to one provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Sent as `HTTP-Referer` to OpenRouter.
    pub referer: Option<String>,
}

impl ProviderSettings {
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            endpoint: provider.endpoint().to_string(),
            referer: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, or `""` when the provider sent none.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: ProviderSettings,
}

impl LlmClient {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn provider(&self) -> Provider {
        self.settings.provider
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Makes a single chat-completion call and returns the decoded reply.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let mut request = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&request_body);

        if self.settings.provider == Provider::OpenRouter {
            let referer = self.settings.referer.as_deref().unwrap_or(DEFAULT_REFERER);
            request = request
                .header("HTTP-Referer", referer)
                .header("X-Title", APP_TITLE);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        debug!(
            "Completion succeeded: model={}, choices={}",
            self.settings.model,
            chat.choices.len()
        );
        Ok(chat)
    }

    /// Calls the provider and parses the reply as a JSON object.
    /// The prompt must instruct the model to return JSON.
    pub async fn call_json_object(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<Map<String, Value>, LlmError> {
        let response = self.call(prompt, system).await?;
        parse_json_object(response.text())
    }

    /// Asks the provider to rewrite a candidate's form as resume JSON.
    pub async fn enhance_form(&self, form: &CandidateForm) -> Result<Map<String, Value>, LlmError> {
        let prompt = prompts::build_enhance_prompt(form);
        self.call_json_object(&prompt, prompts::ENHANCE_SYSTEM).await
    }
}

/// Strips code fences and parses the remainder. Anything but a JSON object
/// is a parse failure carrying the raw reply text.
pub fn parse_json_object(content: &str) -> Result<Map<String, Value>, LlmError> {
    match serde_json::from_str::<Value>(strip_json_fences(content)) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(LlmError::Parse {
            content: content.to_string(),
        }),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text,
    }
}
