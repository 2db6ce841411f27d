//! Endpoint handlers for the epic/generation/convert API
//!
//! Each handler is stateless per request; the convert endpoints take the
//! full generated-content value in the request body rather than reading
//! any server-held result.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use crate::error::Error;
use crate::export;
use crate::generator;
use crate::models::{Epic, GeneratedContent};

/// Request body for /api/generate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Key of the epic to generate stories for
    #[serde(default)]
    pub epic_key: String,
}

/// POST /api/epics - list epics for the configured project
pub async fn list_epics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Epic>>, Error> {
    let epics = state.jira.list_epics(&state.project_key).await?;
    log::debug!("[routes] Listed {} epics for {}", epics.len(), state.project_key);
    Ok(Json(epics))
}

/// POST /api/generate - run one generation request for an epic key
pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GeneratedContent>, Error> {
    let Json(req) = payload.map_err(|e| {
        log::warn!("[routes] Rejected generate request body: {}", e);
        Error::Validation("Request body must be a JSON object.".to_string())
    })?;

    let content = generator::generate(&state.jira, &state.gemini, &req.epic_key).await?;
    Ok(Json(content))
}

/// POST /api/convert/csv - render generated content as a CSV attachment
pub async fn convert_csv_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, Error> {
    let content = coerce_content(json_body(payload, "CSV")?, "CSV")?;
    let csv = export::to_csv(&content);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"jira_stories.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// POST /api/convert/confluence - render generated content as wiki markup
pub async fn convert_confluence_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, Error> {
    let content = coerce_content(json_body(payload, "Confluence markup")?, "Confluence markup")?;
    let markup = export::to_confluence(&content);

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], markup).into_response())
}

/// Unwrap an extracted JSON body, keeping the `{error}` response shape
/// when the body is not valid JSON at all
fn json_body(
    payload: Result<Json<Value>, JsonRejection>,
    format: &'static str,
) -> Result<Value, Error> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(e) => {
            log::error!("[routes] {} conversion received malformed JSON: {}", format, e);
            Err(Error::Conversion(format))
        }
    }
}

/// Coerce an arbitrary JSON body into typed generated content.
/// A mismatch is a conversion failure, reported generically.
fn coerce_content(body: Value, format: &'static str) -> Result<GeneratedContent, Error> {
    serde_json::from_value(body).map_err(|e| {
        log::error!("[routes] {} conversion rejected malformed content: {}", format, e);
        Error::Conversion(format)
    })
}
