//! Confluence wiki markup export
//!
//! Free text from the model is emitted as-is; markup characters inside it
//! are not escaped.

use crate::models::GeneratedContent;

/// Render generated content as Confluence wiki markup
pub fn to_confluence(content: &GeneratedContent) -> String {
    let mut markup = String::new();

    for story in &content.user_stories {
        markup.push_str(&format!("h2. {}\n\n", story.title));
        markup.push_str(&format!("*Description:* {}\n", story.description));
        markup.push_str(&format!("*Story Points:* {}\n\n", story.story_points));

        markup.push_str("h3. Acceptance Criteria\n");
        for criterion in story.acceptance_criteria.as_slice() {
            markup.push_str(&format!("* {}\n", criterion));
        }

        markup.push_str("\n\nh3. Test Cases\n");
        markup.push_str("||Test Case ID||Preconditions||Test Steps||Expected Results||\n");
        for test_case in &story.test_cases {
            // Line-break-within-cell marker keeps multi-step cases in one cell
            let steps = test_case.test_steps.join("\\\\ ");
            markup.push_str(&format!(
                "|{}|{}|{}|{}|\n",
                test_case.test_case_id, test_case.preconditions, steps, test_case.expected_results
            ));
        }

        markup.push_str("\n---\n");
    }

    markup
}
