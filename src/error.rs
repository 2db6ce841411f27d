// Error taxonomy shared across the Jira client, generator, and HTTP surface

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or empty required input (user-correctable)
    #[error("{0}")]
    Validation(String),

    /// The epic search call against Jira failed
    #[error("Could not fetch epics for project '{0}'.")]
    EpicSearch(String),

    /// The point lookup of a single epic failed
    #[error("Could not fetch Epic '{0}' from Jira.")]
    EpicLookup(String),

    /// The generative model call failed; details are logged, not returned
    #[error("Failed to process your request. Check server logs for details.")]
    ModelRequest,

    /// Model output was not valid generated content after fence stripping
    #[error("Failed to process your request. Check server logs for details.")]
    GenerationParse,

    /// A convert endpoint received a body that does not match the schema
    #[error("Failed to convert to {0}.")]
    Conversion(&'static str),
}

impl Error {
    /// HTTP status this error maps to at the endpoint boundary
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body for all failure responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
