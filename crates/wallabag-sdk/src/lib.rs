//! Wallabag Rust SDK
//!
//! Async client for the read-only parts of the Wallabag API: password-grant
//! authentication, listing, fetching and searching saved articles.
//!
//! # Example
//!
//! ```no_run
//! use wallabag_sdk::{Credentials, GetArticlesRequest, WallabagClient};
//!
//! # async fn run() -> Result<(), wallabag_sdk::WallabagError> {
//! let mut client = WallabagClient::new(Some("https://wallabag.example.com"), None)?;
//! client
//!     .authenticate(Credentials::new("client-id", "client-secret", "reader", "password"))
//!     .await?;
//!
//! let articles = client.get_articles(&GetArticlesRequest::default()).await?;
//! for article in articles {
//!     println!("{} - {}", article.id, article.title);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod auth;
mod client;
pub mod config;
mod error;

pub use auth::Credentials;
pub use client::WallabagClient;
pub use config::WallabagConfig;
pub use error::{ApiError, WallabagError};
pub use wallabag_domain::{
    Article, GetArticlesRequest, GetSingleArticleRequest, SearchArticlesRequest, SortOrder,
};
