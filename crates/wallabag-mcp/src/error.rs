//! Error types for MCP server operations.

use thiserror::Error;
use wallabag_domain::RequestError;
use wallabag_sdk::WallabagError;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Invalid request format or parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool or prompt not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wallabag client error
    #[error(transparent)]
    Wallabag(#[from] WallabagError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<RequestError> for McpError {
    fn from(e: RequestError) -> Self {
        McpError::InvalidRequest(e.to_string())
    }
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32602,
            McpError::NotFound(_) => -32602,
            McpError::Wallabag(_) => -32000,
            McpError::JsonError(_) => -32700,
            McpError::IoError(_) => -32000,
        }
    }
}
