// Wire types shared by the Jira client, the generator, and the exporters

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A Jira Epic as listed in the epic selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    pub key: String,
    pub summary: String,
}

/// Resolved epic detail fed into the prompt builder.
/// Exists only for the duration of one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpicDetail {
    pub title: String,
    pub description: String,
}

/// A field the model may return either as a bare string or as an array
/// of strings. Normalized through `as_slice`/`join` so consumers never
/// re-check the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// View the value as a slice, treating a bare string as one element
    pub fn as_slice(&self) -> &[String] {
        match self {
            OneOrMany::One(s) => std::slice::from_ref(s),
            OneOrMany::Many(v) => v,
        }
    }

    /// Join the normalized elements with a separator
    pub fn join(&self, sep: &str) -> String {
        self.as_slice().join(sep)
    }
}

/// The model's output for one generation request, consumed by both exporters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub user_stories: Vec<UserStory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub title: String,
    pub description: String,
    pub acceptance_criteria: OneOrMany,
    /// Kept as a JSON number so `3` stays `3` (not `3.0`) in exports
    pub story_points: Number,
    pub test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_case_id: String,
    pub preconditions: String,
    pub test_steps: OneOrMany,
    pub expected_results: String,
}
