//! Wallabag MCP Server
//!
//! Model Context Protocol server exposing a self-hosted Wallabag instance to
//! AI clients over stdio.
//!
//! Provides 3 MCP tools:
//! - `get_single_wallabag_article` - Fetch one article by id
//! - `get_wallabag_articles` - List saved articles with filters
//! - `search_articles` - Full-text search
//!
//! and one prompt, `ask_for_titles`.
//!
//! Every tool result is a JSON envelope `{"success": true, ...}` or
//! `{"success": false, "error": "..."}`; tool failures never surface as
//! JSON-RPC errors.
//!
//! # Example
//!
//! ```no_run
//! use wallabag_mcp::McpServer;
//! use wallabag_sdk::WallabagConfig;
//!
//! let server = McpServer::new(WallabagConfig::from_env()).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
pub mod prompts;
pub mod protocol;
mod server;
pub mod tools;

pub use error::McpError;
pub use server::McpServer;
