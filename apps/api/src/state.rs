use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider credential is configured.
    pub llm: Option<LlmClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = config.provider_settings().map(LlmClient::new);
        Self { llm, config }
    }
}
