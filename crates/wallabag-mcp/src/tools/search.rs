//! Search tool - Full-text search over saved articles

use crate::error::McpError;
use crate::protocol::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::json;
use wallabag_domain::{Article, SearchArticlesRequest};
use wallabag_sdk::WallabagClient;

/// Parameters for searching articles
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The text to search for
    pub search_term: String,
    /// Number of results to return
    #[serde(default)]
    pub count: Option<u32>,
}

/// Result of a search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Number of articles found
    pub count: usize,
    /// Matching articles
    pub articles: Vec<Article>,
}

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: super::SEARCH_TOOL.to_string(),
        description: "Search for articles from Wallabag by title or content".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "search_term": {"type": "string", "description": "The text to search for"},
                "count": {"type": "integer", "minimum": 1, "description": "The number of search results to return"}
            },
            "required": ["search_term"]
        }),
    }
}

/// Handle search_articles tool invocation
pub async fn handle_search(
    client: &WallabagClient,
    params: SearchParams,
) -> Result<SearchResult, McpError> {
    let request = SearchArticlesRequest::new(params.search_term, params.count);
    request.validate()?;

    let articles = client.search_articles(&request).await?;

    Ok(SearchResult {
        count: articles.len(),
        articles,
    })
}
