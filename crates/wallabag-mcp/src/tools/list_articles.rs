//! Listing tool - Saved articles with filters, paging and sort order

use crate::error::McpError;
use crate::protocol::ToolDefinition;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wallabag_domain::{Article, GetArticlesRequest, SortOrder};
use wallabag_sdk::WallabagClient;

/// Parameters for listing articles
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    /// Get archived articles instead of unread ones
    #[serde(default)]
    pub is_archived: bool,
    /// Filter by domain name
    #[serde(default)]
    pub domain: Option<String>,
    /// Only articles from the last N days
    #[serde(default)]
    pub since_days_ago: Option<u32>,
    /// Number of articles to return
    #[serde(default)]
    pub count: Option<u32>,
    /// "desc" is newest first, "asc" oldest first
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Return the article content as well as metadata
    #[serde(default)]
    pub include_content: bool,
}

impl ListArticlesParams {
    /// Build the client request, resolving `since_days_ago` against now
    ///
    /// Fails when the offset reaches past the representable date range.
    pub fn into_request(self) -> Result<GetArticlesRequest, McpError> {
        let since = match self.since_days_ago {
            Some(days) => Some(
                Duration::try_days(i64::from(days))
                    .and_then(|offset| Utc::now().checked_sub_signed(offset))
                    .ok_or_else(|| {
                        McpError::InvalidRequest(format!(
                            "since_days_ago is out of range: {}",
                            days
                        ))
                    })?,
            ),
            None => None,
        };

        Ok(GetArticlesRequest {
            is_archived: self.is_archived,
            domain: self.domain,
            since,
            count: self.count,
            sort_order: self.sort_order,
            include_content: self.include_content,
        })
    }
}

/// Result of listing articles
#[derive(Debug, Serialize)]
pub struct ListArticlesResult {
    /// Number of articles returned
    pub count: usize,
    /// The articles
    pub saved_wallabag_articles: Vec<Article>,
}

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: super::LIST_ARTICLES_TOOL.to_string(),
        description: "Get saved articles from the user's Wallabag queue. Wallabag is a \
            self-hosted \"read it later\" service in which users save articles for later \
            reading. Articles are returned in JSON format with metadata like title, reading \
            time and URL; the article content can optionally be requested."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "is_archived": {"type": "boolean", "description": "Whether to get archived articles", "default": false},
                "domain": {"type": "string", "description": "Filter by domain name"},
                "since_days_ago": {"type": "integer", "minimum": 0, "description": "Get articles from N days ago"},
                "count": {"type": "integer", "minimum": 1, "description": "The number of articles to return"},
                "sort_order": {"type": "string", "enum": ["asc", "desc"], "description": "'desc' is newest first, 'asc' is oldest first", "default": "desc"},
                "include_content": {"type": "boolean", "description": "Return the article content. Metadata is always returned.", "default": false}
            }
        }),
    }
}

/// Handle get_wallabag_articles tool invocation
pub async fn handle_list_articles(
    client: &WallabagClient,
    params: ListArticlesParams,
) -> Result<ListArticlesResult, McpError> {
    let request = params.into_request()?;
    request.validate()?;

    let articles = client.get_articles(&request).await?;

    Ok(ListArticlesResult {
        count: articles.len(),
        saved_wallabag_articles: articles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params: ListArticlesParams = serde_json::from_str("{}").unwrap();
        let request = params.into_request().unwrap();
        assert_eq!(request, GetArticlesRequest::default());
    }

    #[test]
    fn test_since_days_ago() {
        let params: ListArticlesParams =
            serde_json::from_str(r#"{"since_days_ago": 7, "sort_order": "asc", "count": 5}"#)
                .unwrap();
        let request = params.into_request().unwrap();

        let expected = (Utc::now() - Duration::days(7)).timestamp();
        let since = request.since_timestamp();
        assert!((since - expected).abs() <= 5);
        assert_eq!(request.sort_order, SortOrder::Asc);
        assert_eq!(request.count, Some(5));
    }

    #[test]
    fn test_since_days_ago_out_of_range() {
        let params: ListArticlesParams =
            serde_json::from_str(r#"{"since_days_ago": 4000000000}"#).unwrap();
        match params.into_request() {
            Err(McpError::InvalidRequest(msg)) => assert!(msg.contains("since_days_ago")),
            other => panic!("expected invalid request, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_sort_order_rejected() {
        assert!(serde_json::from_str::<ListArticlesParams>(r#"{"sort_order": "random"}"#).is_err());
    }
}
