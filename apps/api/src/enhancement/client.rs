use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::enhancement::{is_truthy, EnhancementError, Enhancer};
use crate::llm_client::LlmClient;
use crate::models::{CandidateForm, ResumeEnhancement};

#[derive(Serialize)]
struct EnhanceRequest<'a> {
    form: &'a CandidateForm,
}

/// Calls the Enhancement Proxy first and, if that fails, the provider directly
/// when a credential is configured.
#[derive(Clone)]
pub struct EnhancementClient {
    http: Client,
    proxy_url: String,
    direct: Option<LlmClient>,
}

impl EnhancementClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            proxy_url: format!("{}/api/enhance", config.server_url.trim_end_matches('/')),
            direct: config.direct_provider().map(LlmClient::new),
        }
    }

    #[cfg(test)]
    fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    async fn via_proxy(&self, form: &CandidateForm) -> anyhow::Result<ResumeEnhancement> {
        let response = self
            .http
            .post(&self.proxy_url)
            .json(&EnhanceRequest { form })
            .send()
            .await
            .context("proxy request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("proxy returned {status}");
        }

        let body: Value = response.json().await.context("proxy body is not JSON")?;
        match body.get("data") {
            Some(data) if is_truthy(data) => Ok(ResumeEnhancement::from_value(data)),
            _ => bail!("proxy reply has no data"),
        }
    }
}

#[async_trait]
impl Enhancer for EnhancementClient {
    async fn enhance(&self, form: &CandidateForm) -> Result<ResumeEnhancement, EnhancementError> {
        match self.via_proxy(form).await {
            Ok(enhancement) => return Ok(enhancement),
            Err(e) => debug!("Proxy at {} unusable: {e:#}", self.proxy_url),
        }

        let Some(llm) = &self.direct else {
            return Err(EnhancementError::Unavailable);
        };

        warn!(
            "Proxy unavailable, calling {:?} directly (model: {})",
            llm.provider(),
            llm.model()
        );
        let reply = llm.enhance_form(form).await?;
        Ok(ResumeEnhancement::from_value(&Value::Object(reply)))
    }
}
