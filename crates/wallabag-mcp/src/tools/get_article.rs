//! Single article tool - Fetch one saved article by id

use crate::error::McpError;
use crate::protocol::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::json;
use wallabag_domain::{Article, GetSingleArticleRequest};
use wallabag_sdk::WallabagClient;

/// Parameters for fetching one article
#[derive(Debug, Deserialize)]
pub struct GetArticleParams {
    /// The id of the article to fetch
    pub id: u64,
}

/// Result of fetching one article
#[derive(Debug, Serialize)]
pub struct GetArticleResult {
    /// The article, including its content
    pub wallabag_article: Article,
}

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: super::GET_ARTICLE_TOOL.to_string(),
        description: "Get a single saved article from the user's Wallabag queue.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer", "minimum": 1, "description": "The ID of the article to fetch"}
            },
            "required": ["id"]
        }),
    }
}

/// Handle get_single_wallabag_article tool invocation
pub async fn handle_get_article(
    client: &WallabagClient,
    params: GetArticleParams,
) -> Result<GetArticleResult, McpError> {
    let request = GetSingleArticleRequest::new(params.id);
    request.validate()?;

    let article = client.get_single_article(&request).await?;

    Ok(GetArticleResult {
        wallabag_article: article,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_deserialize() {
        let params: GetArticleParams = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        assert_eq!(params.id, 12);
    }

    #[test]
    fn test_negative_id_rejected() {
        assert!(serde_json::from_str::<GetArticleParams>(r#"{"id": -1}"#).is_err());
    }
}
