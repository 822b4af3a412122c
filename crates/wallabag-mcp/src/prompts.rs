//! Prompt templates offered through `prompts/list` and `prompts/get`

use crate::error::McpError;
use crate::protocol::{Content, GetPromptResponse, PromptArgument, PromptDefinition, PromptMessage};
use serde_json::Value;

/// Prompt asking for the titles of recently saved articles
pub const ASK_FOR_TITLES: &str = "ask_for_titles";

const ASK_FOR_TITLES_DESCRIPTION: &str =
    "Asks for a given number of titles from the user's saved articles";

/// Definitions of every prompt
pub fn definitions() -> Vec<PromptDefinition> {
    vec![PromptDefinition {
        name: ASK_FOR_TITLES.to_string(),
        description: ASK_FOR_TITLES_DESCRIPTION.to_string(),
        arguments: vec![PromptArgument {
            name: "count".to_string(),
            description: "How many titles to ask for".to_string(),
            required: true,
        }],
    }]
}

/// Text of the `ask_for_titles` prompt
pub fn ask_for_titles(count: u32) -> String {
    format!(
        "Can you give me the titles for my last {} saved articles from Wallabag?",
        count
    )
}

/// Render a prompt by name
///
/// MCP clients send prompt arguments as strings; numbers are accepted too.
pub fn render(name: &str, arguments: &Value) -> Result<GetPromptResponse, McpError> {
    match name {
        ASK_FOR_TITLES => {
            let count = match arguments.get("count") {
                Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
                Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
                _ => None,
            }
            .filter(|&count| count > 0)
            .ok_or_else(|| {
                McpError::InvalidRequest("Prompt argument 'count' must be a positive integer".into())
            })?;

            Ok(GetPromptResponse {
                description: ASK_FOR_TITLES_DESCRIPTION.to_string(),
                messages: vec![PromptMessage {
                    role: "user".to_string(),
                    content: Content::Text {
                        text: ask_for_titles(count),
                    },
                }],
            })
        }
        _ => Err(McpError::NotFound(format!("prompt '{}'", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_with_string_count() {
        let response = render(ASK_FOR_TITLES, &json!({"count": "5"})).unwrap();
        let Content::Text { text } = &response.messages[0].content;
        assert_eq!(
            text,
            "Can you give me the titles for my last 5 saved articles from Wallabag?"
        );
    }

    #[test]
    fn test_render_with_numeric_count() {
        let response = render(ASK_FOR_TITLES, &json!({"count": 3})).unwrap();
        assert_eq!(response.messages[0].role, "user");
    }

    #[test]
    fn test_render_errors() {
        assert!(matches!(
            render(ASK_FOR_TITLES, &json!({})),
            Err(McpError::InvalidRequest(_))
        ));
        assert!(matches!(
            render("nope", &json!({})),
            Err(McpError::NotFound(_))
        ));
    }
}
