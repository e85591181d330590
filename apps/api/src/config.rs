use anyhow::{Context, Result};

use crate::llm_client::{self, Provider, ProviderSettings};

/// Proxy server configuration loaded from environment variables.
///
/// Built once at startup and handed to `AppState`; handlers never read the
/// environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when unset or empty. The proxy then answers 500 "not configured".
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_api_url: String,
    pub public_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openrouter_api_key: None,
            openrouter_model: llm_client::DEFAULT_OPENROUTER_MODEL.to_string(),
            openrouter_api_url: llm_client::OPENROUTER_API_URL.to_string(),
            public_url: None,
            port: 3000,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_model: optional_env("OPENROUTER_MODEL").unwrap_or(defaults.openrouter_model),
            openrouter_api_url: optional_env("OPENROUTER_API_URL")
                .unwrap_or(defaults.openrouter_api_url),
            public_url: optional_env("PUBLIC_URL"),
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Provider settings for the proxy, if a credential is configured.
    pub fn provider_settings(&self) -> Option<ProviderSettings> {
        let key = self.openrouter_api_key.as_deref()?;
        let mut settings = ProviderSettings::new(Provider::OpenRouter, key)
            .with_model(&self.openrouter_model)
            .with_endpoint(&self.openrouter_api_url);
        if let Some(url) = &self.public_url {
            settings = settings.with_referer(url);
        }
        Some(settings)
    }
}

/// Client-side settings for remote enhancement.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Proxy base URL; `/api/enhance` is appended.
    pub server_url: String,
    pub openai_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub model: Option<String>,
    /// Overrides the selected provider's chat-completion endpoint.
    pub provider_url: Option<String>,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Default::default()
        }
    }

    /// Picks the direct provider the same way for every caller:
    /// a plain OpenAI key selects OpenAI; an OpenRouter key, or an `sk-or-`
    /// key passed as the OpenAI key, selects OpenRouter.
    pub fn direct_provider(&self) -> Option<ProviderSettings> {
        let openai = non_empty(self.openai_api_key.as_deref());
        let openrouter = non_empty(self.openrouter_api_key.as_deref());

        let mut settings = match (openai, openrouter) {
            (Some(key), _) if !is_openrouter_key(key) => ProviderSettings::new(Provider::OpenAi, key),
            (_, Some(key)) => ProviderSettings::new(Provider::OpenRouter, key),
            (Some(key), None) => ProviderSettings::new(Provider::OpenRouter, key),
            (None, None) => return None,
        };

        if let Some(url) = non_empty(self.provider_url.as_deref()) {
            settings = settings.with_endpoint(url);
        }
        // OpenAI always runs its default model; the override names an OpenRouter model.
        if settings.provider == Provider::OpenRouter {
            if let Some(model) = non_empty(self.model.as_deref()) {
                settings = settings.with_model(model);
            }
            settings = settings.with_referer(self.server_url.trim_end_matches('/'));
        }
        Some(settings)
    }
}

pub fn is_openrouter_key(key: &str) -> bool {
    key.starts_with("sk-or-")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
