// Jira REST API integration for epic listing and lookup

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::{json, Value};

use crate::error::Error;
use crate::models::{Epic, EpicDetail};

/// Substituted when an epic has no description field
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Jira API client
///
/// Single-attempt, fail-fast: no retries, no token refresh. Upstream error
/// bodies are logged server-side and never surfaced to the caller.
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    /// Create a new Jira client
    pub fn new(base_url: String, email: String, api_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            email,
            api_token,
        }
    }

    /// Basic auth header value, encoded once per call
    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.api_token);
        format!("Basic {}", BASE64.encode(credentials))
    }

    /// List epics in a project, newest created first.
    ///
    /// A project with no epics yields an empty vec, not an error.
    pub async fn list_epics(&self, project_key: &str) -> Result<Vec<Epic>, Error> {
        let url = format!(
            "{}/rest/api/3/search/jql",
            self.base_url.trim_end_matches('/')
        );
        let jql = format!(
            "project = \"{}\" AND issuetype = Epic ORDER BY created DESC",
            project_key
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .json(&json!({ "jql": jql, "fields": ["summary"] }))
            .send()
            .await
            .map_err(|e| {
                log::error!("[JiraClient] Epic search request failed: {}", e);
                Error::EpicSearch(project_key.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("[JiraClient] Epic search returned {}: {}", status, body);
            return Err(Error::EpicSearch(project_key.to_string()));
        }

        let data: Value = response.json().await.map_err(|e| {
            log::error!("[JiraClient] Failed to parse search response: {}", e);
            Error::EpicSearch(project_key.to_string())
        })?;

        Ok(parse_epics(&data))
    }

    /// Fetch one epic and flatten its rich-text description to plain text
    pub async fn get_epic_detail(&self, epic_key: &str) -> Result<EpicDetail, Error> {
        let url = format!(
            "{}/rest/api/3/issue/{}",
            self.base_url.trim_end_matches('/'),
            epic_key
        );

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("[JiraClient] Issue lookup request failed: {}", e);
                Error::EpicLookup(epic_key.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("[JiraClient] Issue lookup returned {}: {}", status, body);
            return Err(Error::EpicLookup(epic_key.to_string()));
        }

        let data: Value = response.json().await.map_err(|e| {
            log::error!("[JiraClient] Failed to parse issue response: {}", e);
            Error::EpicLookup(epic_key.to_string())
        })?;

        Ok(detail_from_fields(&data["fields"]))
    }
}

/// Build epic detail from the issue fields, substituting the fixed
/// placeholder when no description is present
fn detail_from_fields(fields: &Value) -> EpicDetail {
    let title = fields["summary"].as_str().unwrap_or("").to_string();
    let description = flatten_description(&fields["description"])
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    EpicDetail { title, description }
}

/// Map a search response onto the epic list; an empty or missing issues
/// array is a valid empty result, not an error
fn parse_epics(data: &Value) -> Vec<Epic> {
    data["issues"]
        .as_array()
        .map(|issues| {
            issues
                .iter()
                .map(|issue| Epic {
                    key: issue["key"].as_str().unwrap_or("").to_string(),
                    summary: issue["fields"]["summary"].as_str().unwrap_or("").to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Flatten an Atlassian Document Format description into plain text.
///
/// Concatenates the text runs within each top-level node and joins nodes
/// with newlines. Returns None when the field is absent or not a document.
fn flatten_description(description: &Value) -> Option<String> {
    let paragraphs = description.get("content")?.as_array()?;

    let text = paragraphs
        .iter()
        .map(|paragraph| {
            paragraph["content"]
                .as_array()
                .map(|runs| {
                    runs.iter()
                        .filter_map(|run| run["text"].as_str())
                        .collect::<String>()
                })
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(text)
}
