//! MCP tool implementations

mod get_article;
mod list_articles;
mod search;

pub use get_article::{handle_get_article, GetArticleParams, GetArticleResult};
pub use list_articles::{handle_list_articles, ListArticlesParams, ListArticlesResult};
pub use search::{handle_search, SearchParams, SearchResult};

use crate::error::McpError;
use crate::protocol::ToolDefinition;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Tool name for fetching one article
pub const GET_ARTICLE_TOOL: &str = "get_single_wallabag_article";
/// Tool name for listing articles
pub const LIST_ARTICLES_TOOL: &str = "get_wallabag_articles";
/// Tool name for searching articles
pub const SEARCH_TOOL: &str = "search_articles";

/// Definitions of every tool, as returned by `tools/list`
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        get_article::definition(),
        list_articles::definition(),
        search::definition(),
    ]
}

/// Decode tool arguments, reporting problems as invalid requests
pub fn parse_params<T: DeserializeOwned>(arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments)
        .map_err(|e| McpError::InvalidRequest(format!("Invalid arguments: {}", e)))
}

/// Wrap a tool outcome in the `{success, ...}` envelope
///
/// Errors never escape: they become `{"success": false, "error": "..."}`.
pub fn envelope<T: Serialize>(outcome: Result<T, McpError>) -> Value {
    let payload = outcome.and_then(|result| Ok(serde_json::to_value(result)?));

    match payload {
        Ok(Value::Object(mut fields)) => {
            fields.insert("success".to_string(), Value::Bool(true));
            Value::Object(fields)
        }
        Ok(other) => json!({"success": true, "result": other}),
        Err(e) => json!({"success": false, "error": e.to_string()}),
    }
}
