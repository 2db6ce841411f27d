// Prompt construction and generation orchestration

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::gemini::GeminiClient;
use crate::jira::JiraClient;
use crate::models::{EpicDetail, GeneratedContent};

static FENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Matches Markdown code fence markers the model may wrap its JSON in
fn fence_pattern() -> &'static Regex {
    FENCE_PATTERN.get_or_init(|| Regex::new(r"```(?:json)?").unwrap())
}

/// Render an epic into the fixed instruction template.
///
/// Title and description are interpolated verbatim; the output is only
/// consumed by the model call, so no escaping is applied.
pub fn build_prompt(epic: &EpicDetail) -> String {
    format!(
        "You are an expert Agile software development assistant. Your task is to analyze a Jira Epic and generate User Stories and their corresponding Test Cases.\n\
        Based on this epic: Title: \"{}\", Description: \"{}\"\n\
        Generate 3-5 user stories. For EACH story, provide \"title\", \"description\", \"acceptanceCriteria\" (as an array of strings in Given/When/Then format), and \"storyPoints\".\n\
        For EACH story, also generate 2-3 test cases. For EACH test case, provide \"testCaseId\", \"preconditions\", \"testSteps\" (as an array of strings), and \"expectedResults\".\n\
        Provide the final output ONLY in a valid JSON format. The root object should be {{ \"userStories\": [...] }}.",
        epic.title, epic.description
    )
}

/// Remove all code fence markers and surrounding whitespace
pub fn strip_code_fences(text: &str) -> String {
    fence_pattern().replace_all(text, "").trim().to_string()
}

/// Parse the model's raw text into typed generated content.
///
/// Invalid JSON and schema mismatches are both terminal; the raw output is
/// logged for diagnosis but never returned to the caller.
pub fn parse_generated(raw: &str) -> Result<GeneratedContent, Error> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| {
        log::error!("[generator] Model output was not valid generated content: {}", e);
        log::debug!("[generator] Raw model output: {}", raw);
        Error::GenerationParse
    })
}

/// Run one generation request end to end: resolve the epic, build the
/// prompt, call the model, and parse its response.
pub async fn generate(
    jira: &JiraClient,
    gemini: &GeminiClient,
    epic_key: &str,
) -> Result<GeneratedContent, Error> {
    if epic_key.trim().is_empty() {
        return Err(Error::Validation("Jira Epic Key is required.".to_string()));
    }

    let detail = jira.get_epic_detail(epic_key).await?;
    log::info!("[generator] Generating stories for epic {}", epic_key);

    let prompt = build_prompt(&detail);
    let raw = gemini.generate(&prompt).await?;

    parse_generated(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_title_and_description() {
        let detail = EpicDetail {
            title: "Checkout flow".to_string(),
            description: "Allow guests to pay without an account.".to_string(),
        };

        let prompt = build_prompt(&detail);
        assert!(prompt.contains("Checkout flow"));
        assert!(prompt.contains("Allow guests to pay without an account."));
        assert!(prompt.contains(r#"{ "userStories": [...] }"#));
    }

    #[test]
    fn test_strip_code_fences_removes_json_fence() {
        let raw = "```json\n{\"userStories\":[]}\n```";
        assert_eq!(strip_code_fences(raw), "{\"userStories\":[]}");
    }

    #[test]
    fn test_strip_code_fences_leaves_plain_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_generated_accepts_fenced_empty_stories() {
        let content = parse_generated("```json\n{\"userStories\":[]}\n```").unwrap();
        assert!(content.user_stories.is_empty());
    }

    #[test]
    fn test_parse_generated_rejects_prose() {
        assert!(matches!(
            parse_generated("Sorry, I cannot help with that."),
            Err(Error::GenerationParse)
        ));
    }
}
