//! HTTP API for browser access to epic listing, generation, and export

pub mod routes;
mod static_files;

pub use routes::GenerateRequest;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::gemini::GeminiClient;
use crate::jira::JiraClient;

/// Shared state for the server: the two upstream clients and the project
/// whose epics are listed. No per-request state is held anywhere.
#[derive(Clone)]
pub struct AppState {
    pub jira: Arc<JiraClient>,
    pub gemini: Arc<GeminiClient>,
    pub project_key: String,
}

/// Version information for the server
#[derive(serde::Serialize)]
struct VersionInfo {
    version: String,
}

/// Assemble the application router over the shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/epics", post(routes::list_epics_handler))
        .route("/api/generate", post(routes::generate_handler))
        .route("/api/convert/csv", post(routes::convert_csv_handler))
        .route(
            "/api/convert/confluence",
            post(routes::convert_confluence_handler),
        )
        .route("/health", get(health_handler))
        .route("/api/version", get(version_handler))
        .fallback(static_files::serve_static)
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(config: ServerConfig) -> Result<(), String> {
    let project_key = config.jira_project_key.clone();
    let state = AppState {
        jira: Arc::new(JiraClient::new(
            config.jira_base_url,
            config.jira_user_email,
            config.jira_api_token,
        )),
        gemini: Arc::new(GeminiClient::new(config.gemini_api_key, config.gemini_model)),
        project_key: project_key.clone(),
    };

    // CORS must be the outermost layer so preflight requests are answered
    // before anything else runs. Explicit headers instead of Any to avoid
    // browser warnings when credentials are involved.
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
    };

    let app = build_router(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    println!("Epicgen server running at http://{}", addr);
    println!("  POST /api/epics               - List epics for project {}", project_key);
    println!("  POST /api/generate            - Generate stories for an epic");
    println!("  POST /api/convert/csv         - Export generated content as CSV");
    println!("  POST /api/convert/confluence  - Export generated content as wiki markup");
    println!("  GET  /health                  - Health check");

    log::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    log::info!("Shutdown signal received, stopping server...");
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

/// Version endpoint - returns the crate version
async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
