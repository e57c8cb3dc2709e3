//! HTTP handlers for the suggest service.

use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use serde_json::{Value, json};
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

/// Prompt sent upstream for a snippet of user text. The snippet is
/// interpolated verbatim, unescaped.
pub(crate) fn build_prompt(text: &str) -> String {
    format!(
        "Given this text: \"{}\", suggest 2-3 related search queries or questions.",
        text
    )
}

/// POST /api/analyze
///
/// Relays the submitted text to the completion API and returns the first
/// choice's content, trimmed.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Received request to /api/analyze");

    let data = match body {
        Ok(Json(data)) if !data.is_null() => data,
        _ => {
            tracing::warn!("No data provided in request");
            return Err(AppError::BadRequest(anyhow::anyhow!("No data provided")));
        }
    };
    tracing::debug!(payload = %data, "Request data");

    let text = data.get("text").and_then(Value::as_str).unwrap_or_default();
    if text.is_empty() {
        tracing::warn!("No text provided in request data");
        return Err(AppError::BadRequest(anyhow::anyhow!("No text provided")));
    }

    tracing::info!(text = %text, "Processing text");
    let prompt = build_prompt(text);

    tracing::info!(
        model = %state.config.upstream.model,
        "Sending request to completion API"
    );
    let completion = state.provider.complete(&prompt).await?;
    let result = completion.trim().to_string();

    tracing::info!(
        preview = %result.chars().take(50).collect::<String>(),
        "Received response from completion API"
    );

    Ok(Json(AnalyzeResponse { result }))
}

/// GET /api/test
///
/// Simple test endpoint to verify the API is working.
pub async fn api_test() -> impl IntoResponse {
    Json(json!({ "status": "API is working!" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_interpolates_text_verbatim() {
        assert_eq!(
            build_prompt("climate change"),
            "Given this text: \"climate change\", suggest 2-3 related search queries or questions."
        );
    }

    #[test]
    fn prompt_does_not_escape_quotes() {
        assert_eq!(
            build_prompt("a \"quoted\" snippet"),
            "Given this text: \"a \"quoted\" snippet\", suggest 2-3 related search queries or questions."
        );
    }
}
