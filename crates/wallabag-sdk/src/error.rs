//! Error types for the Wallabag SDK.

use thiserror::Error;

/// Wallabag client errors
#[derive(Debug, Error)]
pub enum WallabagError {
    /// Missing or invalid configuration (base URL, credentials)
    #[error("{0}")]
    Config(String),

    /// Token exchange failed, or the client has not authenticated yet
    #[error("{message}")]
    Auth {
        /// Human-readable description
        message: String,
        /// The API failure behind it, if any
        #[source]
        source: Option<ApiError>,
    },

    /// A data request failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl WallabagError {
    /// Authentication error without an underlying API failure
    pub fn auth(message: impl Into<String>) -> Self {
        WallabagError::Auth {
            message: message.into(),
            source: None,
        }
    }
}

/// HTTP and payload failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("API request failed: {status} - {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Connection, DNS, TLS or timeout failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body was not valid JSON
    #[error("Failed to parse {context} response: {reason}")]
    Parse {
        /// Which response could not be parsed
        context: &'static str,
        /// Parser message
        reason: String,
    },

    /// Valid JSON that does not describe an article
    #[error("Invalid article payload: {0}")]
    Deserialize(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        // The URL may carry credentials in its query string.
        let e = e.without_url();
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ApiError::Transport(message)
    }
}
