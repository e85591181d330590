//! Axum route handlers for the Enhancement Proxy.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::enhancement::is_truthy;
use crate::errors::AppError;
use crate::models::CandidateForm;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub data: Value,
}

/// POST /api/enhance
///
/// Body `{ "form": CandidateForm }`. Forwards one prompt to the provider and
/// returns the parsed reply object as `data`.
pub async fn handle_enhance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EnhanceResponse>, AppError> {
    let llm = state
        .llm
        .as_ref()
        .ok_or(AppError::NotConfigured("OPENROUTER_API_KEY"))?;

    let form = extract_form(&body)
        .ok_or_else(|| AppError::Validation("Missing form data".to_string()))?;

    info!(
        "Enhancing resume via {} (prompt fields: {} bytes)",
        llm.model(),
        form_size(&form)
    );

    let data = llm.enhance_form(&form).await?;

    Ok(Json(EnhanceResponse {
        data: Value::Object(data),
    }))
}

/// OPTIONS /api/enhance (CORS preflight), empty 200.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/enhance.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// `form` from a JSON body. A body that is not JSON counts as no form.
fn extract_form(body: &[u8]) -> Option<CandidateForm> {
    let body: Value = serde_json::from_slice(body).ok()?;
    let form = body.get("form").filter(|f| is_truthy(f))?;
    Some(CandidateForm::from_value(form))
}

fn form_size(form: &CandidateForm) -> usize {
    [
        &form.name,
        &form.title,
        &form.email,
        &form.phone,
        &form.location,
        &form.links,
        &form.summary,
        &form.skills,
        &form.experience,
        &form.education,
        &form.projects,
    ]
    .iter()
    .map(|s| s.len())
    .sum()
}
