// Endpoint tests driving the router directly, without a live server.
// None of these requests reach Jira or Gemini.

#[cfg(test)]
mod server_integration_tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use epicgen_lib::gemini::GeminiClient;
    use epicgen_lib::jira::JiraClient;
    use epicgen_lib::server::{build_router, AppState};

    fn test_router() -> Router {
        let state = AppState {
            jira: Arc::new(JiraClient::new(
                "https://example.invalid".to_string(),
                "dev@example.com".to_string(),
                "token".to_string(),
            )),
            gemini: Arc::new(GeminiClient::new(
                "key".to_string(),
                "gemini-2.5-flash".to_string(),
            )),
            project_key: "PROJ".to_string(),
        };
        build_router(state)
    }

    async fn post(path: &str, body: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn error_field(body: &str) -> String {
        let value: Value = serde_json::from_str(body).expect("failure body should be JSON");
        value["error"]
            .as_str()
            .expect("failure body should carry an error string")
            .to_string()
    }

    #[tokio::test]
    async fn test_generate_with_missing_key_is_400_json_error() {
        let (status, _, body) = post("/api/generate", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_field(&body), "Jira Epic Key is required.");
    }

    #[tokio::test]
    async fn test_generate_with_invalid_json_body_is_400_json_error() {
        let (status, _, body) = post("/api/generate", "epicKey=PROJ-1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_field(&body), "Request body must be a JSON object.");
    }

    #[tokio::test]
    async fn test_convert_csv_with_invalid_json_body_is_500_json_error() {
        let (status, _, body) = post("/api/convert/csv", "not json at all").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_field(&body), "Failed to convert to CSV.");
    }

    #[tokio::test]
    async fn test_convert_csv_with_wrong_shape_is_500_json_error() {
        let (status, _, body) = post("/api/convert/csv", r#"{"stories": []}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_field(&body), "Failed to convert to CSV.");
    }

    #[tokio::test]
    async fn test_convert_csv_returns_attachment_with_header_row() {
        let (status, headers, body) = post("/api/convert/csv", r#"{"userStories": []}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"jira_stories.csv\""
        );
        assert_eq!(
            body,
            "User Story Title,Description,Acceptance Criteria,Story Points,Test Case ID,Preconditions,Test Steps,Expected Results"
        );
    }

    #[tokio::test]
    async fn test_convert_confluence_with_invalid_json_body_is_500_json_error() {
        let (status, _, body) = post("/api/convert/confluence", "```json").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_field(&body), "Failed to convert to Confluence markup.");
    }

    #[tokio::test]
    async fn test_convert_confluence_empty_content_is_empty_plain_text() {
        let (status, headers, body) =
            post("/api/convert/confluence", r#"{"userStories": []}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
