//! Article module - one saved entry in a Wallabag account

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::wire;

/// A saved "read-it-later" entry
///
/// Articles are built by deserializing a server JSON object and are never
/// mutated afterwards. `id`, `title`, `url`, `created_at` and `updated_at`
/// are required; every other field falls back to `None` or `false` when the
/// server omits it or sends `null`.
///
/// # Examples
///
/// ```
/// use wallabag_domain::Article;
///
/// let json = r#"{
///     "id": 7,
///     "title": "Ownership",
///     "url": "https://example.com/ownership",
///     "created_at": "2023-01-01T10:00:00+0000",
///     "updated_at": "2023-01-01T11:00:00+0000",
///     "is_starred": 1
/// }"#;
///
/// let article: Article = serde_json::from_str(json).unwrap();
/// assert_eq!(article.id, 7);
/// assert!(article.is_starred);
/// assert!(!article.is_archived);
/// assert!(article.content.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier
    pub id: u64,

    /// Article title
    pub title: String,

    /// Source URL
    pub url: String,

    /// Full content, present only when requested with full detail
    #[serde(default)]
    pub content: Option<String>,

    /// When the entry was saved
    #[serde(deserialize_with = "wire::timestamp")]
    pub created_at: DateTime<FixedOffset>,

    /// When the entry was last modified
    #[serde(deserialize_with = "wire::timestamp")]
    pub updated_at: DateTime<FixedOffset>,

    /// Estimated reading time in minutes
    #[serde(default)]
    pub reading_time: Option<u32>,

    /// Domain the article was fetched from
    #[serde(default)]
    pub domain_name: Option<String>,

    /// Preview image URL
    #[serde(default)]
    pub preview_picture: Option<String>,

    /// HTTP status of the last fetch, as text
    #[serde(default, deserialize_with = "wire::lenient_text")]
    pub http_status: Option<String>,

    /// Whether the entry has been archived
    #[serde(default, deserialize_with = "wire::flag")]
    pub is_archived: bool,

    /// Whether the entry has been starred
    #[serde(default, deserialize_with = "wire::flag")]
    pub is_starred: bool,
}
