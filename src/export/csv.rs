//! Delimited-text export: one row per test case, story fields repeated

use crate::models::GeneratedContent;

const HEADERS: &str = "User Story Title,Description,Acceptance Criteria,Story Points,Test Case ID,Preconditions,Test Steps,Expected Results";

/// Wrap a textual field in double quotes, doubling internal quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render generated content as CSV.
///
/// Total over well-typed input: an empty story list yields just the header
/// row, and a story with no test cases contributes no rows.
pub fn to_csv(content: &GeneratedContent) -> String {
    let mut rows = vec![HEADERS.to_string()];

    for story in &content.user_stories {
        let title = quote(&story.title);
        let description = quote(&story.description);
        let criteria = quote(&story.acceptance_criteria.join("\n"));

        for test_case in &story.test_cases {
            let row = [
                title.clone(),
                description.clone(),
                criteria.clone(),
                story.story_points.to_string(),
                quote(&test_case.test_case_id),
                quote(&test_case.preconditions),
                quote(&test_case.test_steps.join("\n")),
                quote(&test_case.expected_results),
            ];
            rows.push(row.join(","));
        }
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_doubles_internal_quotes() {
        assert_eq!(quote(r#"say "hi""#), r#""say ""hi""""#);
    }

    #[test]
    fn test_empty_content_is_header_only() {
        let content: GeneratedContent =
            serde_json::from_str(r#"{"userStories":[]}"#).unwrap();
        assert_eq!(to_csv(&content), HEADERS);
    }
}
