//! Wallabag Domain Layer
//!
//! Value types shared by the Wallabag client and the MCP server.
//!
//! ## Key Concepts
//!
//! - **Article**: one saved "read-it-later" entry with metadata and optional content
//! - **Request descriptors**: the parameters of each read operation
//! - **Sort order**: newest-first or oldest-first listing
//!
//! Articles are only ever produced by deserializing a server payload. The
//! deserializers accept both RFC 3339 and Wallabag's own timestamp format,
//! and the integer flags Wallabag uses for booleans.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod request;
mod wire;

// Re-exports for convenience
pub use article::Article;
pub use request::{
    GetArticlesRequest, GetSingleArticleRequest, RequestError, SearchArticlesRequest, SortOrder,
    DEFAULT_PAGE_SIZE,
};
