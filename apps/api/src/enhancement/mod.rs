//! Remote enhancement: the proxy handler, the client that calls it (or the
//! provider directly), and the merge that folds a reply into the local record.
//!
//! Failure of the remote path is an ordinary `Err`, never a panic; the
//! generation pipeline answers every error with the locally structured record.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::LlmError;
use crate::models::{CandidateForm, ResumeEnhancement, ResumeRecord};
use crate::structuring::build_resume_record;

pub mod client;
pub mod handlers;
pub mod merge;

pub use client::EnhancementClient;
pub use merge::merge_enhancement;

#[derive(Debug, Error)]
pub enum EnhancementError {
    /// The proxy could not be used and no provider credential is configured.
    #[error("remote enhancement unavailable")]
    Unavailable,

    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),
}

/// Source of AI rewrites for a candidate form.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, form: &CandidateForm) -> Result<ResumeEnhancement, EnhancementError>;
}

/// Enhancer that never reaches the network.
pub struct LocalOnly;

#[async_trait]
impl Enhancer for LocalOnly {
    async fn enhance(&self, _form: &CandidateForm) -> Result<ResumeEnhancement, EnhancementError> {
        Err(EnhancementError::Unavailable)
    }
}

/// Builds the local record, then merges the enhancer's reply into it.
/// Any enhancement failure yields the local record unchanged.
pub async fn generate_resume(form: &CandidateForm, enhancer: &dyn Enhancer) -> ResumeRecord {
    let base = build_resume_record(form);

    match enhancer.enhance(form).await {
        Ok(ai) => merge_enhancement(base, ai),
        Err(EnhancementError::Unavailable) => {
            info!("Remote enhancement unavailable; using local structuring");
            base
        }
        Err(e) => {
            warn!("Remote enhancement failed, falling back to local structuring: {e}");
            base
        }
    }
}

/// JavaScript-style truthiness, used where the browser contract checks
/// `if (value)`: null, false, 0 and "" are absent.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
