//! Request descriptors for the three read operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the caller does not ask for a specific count
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// A request descriptor that violates its preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Article ids start at 1
    #[error("Article id must be a positive integer")]
    InvalidId,

    /// Search needs something to search for
    #[error("Search term must not be empty")]
    EmptySearchTerm,

    /// A count of zero would return nothing
    #[error("Count must be a positive integer")]
    InvalidCount,
}

/// Listing order for articles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,

    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Get the order as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Fetch one article by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSingleArticleRequest {
    /// The id of the article to fetch
    pub id: u64,
}

impl GetSingleArticleRequest {
    /// Create a request for the given article id
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    /// Check the request preconditions
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.id == 0 {
            return Err(RequestError::InvalidId);
        }
        Ok(())
    }
}

/// Full-text search over saved articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArticlesRequest {
    /// The text to search for
    pub search_term: String,

    /// Maximum number of results
    pub count: Option<u32>,
}

impl SearchArticlesRequest {
    /// Create a search request
    pub fn new(search_term: impl Into<String>, count: Option<u32>) -> Self {
        Self {
            search_term: search_term.into(),
            count,
        }
    }

    /// Check the request preconditions
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.search_term.trim().is_empty() {
            return Err(RequestError::EmptySearchTerm);
        }
        validate_count(self.count)
    }

    /// Page size sent to the server
    pub fn page_size(&self) -> u32 {
        page_size(self.count)
    }
}

/// List saved articles with filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetArticlesRequest {
    /// Return archived entries instead of unread ones
    pub is_archived: bool,

    /// Only entries from this domain
    pub domain: Option<String>,

    /// Only entries changed since this instant
    pub since: Option<DateTime<Utc>>,

    /// Maximum number of entries
    pub count: Option<u32>,

    /// Listing order
    pub sort_order: SortOrder,

    /// Include the full article content, not just metadata
    pub include_content: bool,
}

impl GetArticlesRequest {
    /// Check the request preconditions
    pub fn validate(&self) -> Result<(), RequestError> {
        validate_count(self.count)
    }

    /// Page size sent to the server
    pub fn page_size(&self) -> u32 {
        page_size(self.count)
    }

    /// Unix seconds of `since`, or 0 to fetch everything
    pub fn since_timestamp(&self) -> i64 {
        self.since.map(|since| since.timestamp()).unwrap_or(0)
    }

    /// Domain filter, if one was given and is not blank
    pub fn domain_filter(&self) -> Option<&str> {
        self.domain.as_deref().filter(|domain| !domain.is_empty())
    }
}

fn validate_count(count: Option<u32>) -> Result<(), RequestError> {
    match count {
        Some(0) => Err(RequestError::InvalidCount),
        _ => Ok(()),
    }
}

// Zero is treated like "not given", matching the server's own default.
fn page_size(count: Option<u32>) -> u32 {
    count.filter(|&count| count > 0).unwrap_or(DEFAULT_PAGE_SIZE)
}
