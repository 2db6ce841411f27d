//! Static file serving for the embedded browser UI
//!
//! Uses rust-embed to bundle the public/ folder into the binary, enabling
//! single-binary distribution.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    response::IntoResponse,
};
use rust_embed::Embed;

/// Embedded frontend assets, populated at compile time
#[derive(Embed)]
#[folder = "public/"]
struct FrontendAssets;

/// Serve embedded static files, falling back to index.html for the root
pub async fn serve_static(req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path().trim_start_matches('/');

    if let Some(response) = serve_file(path) {
        return response;
    }

    // Bare origin and extensionless paths get the single page
    if path.is_empty() || !path.contains('.') {
        if let Some(response) = serve_file("index.html") {
            return response;
        }
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not found"))
        .unwrap()
}

/// Serve a specific file from embedded assets
fn serve_file(path: &str) -> Option<Response<Body>> {
    let file = FrontendAssets::get(path)?;

    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .body(Body::from(file.data.to_vec()))
        .ok()
}
