// Google Generative Language API client (generateContent only)

use serde::{Deserialize, Serialize};

use crate::error::Error;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model, overridable via configuration
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Generative Language REST API
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client for the given API key and model name
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Send a prompt and return the model's raw text response.
    ///
    /// Single attempt; any transport or API failure is terminal for the
    /// request. Upstream error bodies are logged, never returned.
    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}/models/{}:generateContent", BASE_URL, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("[GeminiClient] generateContent request failed: {}", e);
                Error::ModelRequest
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("[GeminiClient] generateContent returned {}: {}", status, body);
            return Err(Error::ModelRequest);
        }

        let data: GenerateContentResponse = response.json().await.map_err(|e| {
            log::error!("[GeminiClient] Failed to parse model response: {}", e);
            Error::ModelRequest
        })?;

        extract_text(&data).ok_or_else(|| {
            log::error!("[GeminiClient] Model response contained no candidates");
            Error::ModelRequest
        })
    }
}

/// Concatenate the part text of the first candidate, if any
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    Some(
        content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_takes_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "{\"userStories\":" }, { "text": " []}" }] } },
                    { "content": { "parts": [{ "text": "ignored" }] } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(extract_text(&response).unwrap(), r#"{"userStories": []}"#);
    }

    #[test]
    fn test_extract_text_empty_candidates_is_none() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(&response).is_none());
    }
}
