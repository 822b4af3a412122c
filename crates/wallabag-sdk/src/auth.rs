//! OAuth2 password-grant token exchange.

use crate::config::{redact, WallabagConfig};
use crate::error::{ApiError, WallabagError};
use serde::Deserialize;
use std::fmt;

/// Credentials for the password grant
///
/// Fields left as `None` (or empty) are filled in from the client's
/// [`WallabagConfig`] when authenticating.
#[derive(Clone, Default)]
pub struct Credentials {
    /// OAuth client id
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// Account user name
    pub username: Option<String>,
    /// Account password
    pub password: Option<String>,
}

impl Credentials {
    /// Credentials with every field given explicitly
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Fill gaps from the configuration; every field must end up set
    pub(crate) fn resolve(self, config: &WallabagConfig) -> Result<ResolvedCredentials, WallabagError> {
        let pick = |explicit: Option<String>, fallback: &Option<String>| {
            explicit
                .filter(|value| !value.is_empty())
                .or_else(|| fallback.clone())
        };

        match (
            pick(self.client_id, &config.client_id),
            pick(self.client_secret, &config.client_secret),
            pick(self.username, &config.username),
            pick(self.password, &config.password),
        ) {
            (Some(client_id), Some(client_secret), Some(username), Some(password)) => {
                Ok(ResolvedCredentials {
                    client_id,
                    client_secret,
                    username,
                    password,
                })
            }
            _ => Err(WallabagError::Config(
                "Missing required authentication parameters. Please provide client_id, \
                 client_secret, username, and password or set corresponding WALLABAG_ \
                 environment variables."
                    .to_string(),
            )),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

/// Credentials with every field present
pub(crate) struct ResolvedCredentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}

impl ResolvedCredentials {
    /// Query parameters of the token request
    pub(crate) fn into_query(self) -> Vec<(&'static str, String)> {
        vec![
            ("grant_type", "password".to_string()),
            ("client_id", self.client_id),
            ("client_secret", self.client_secret),
            ("username", self.username),
            ("password", self.password),
        ]
    }
}

/// Body of `/oauth/v2/token`
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Extract the access token from a token endpoint response body
pub(crate) fn parse_token_response(body: &str) -> Result<String, WallabagError> {
    let response: TokenResponse = serde_json::from_str(body).map_err(|e| {
        let source = ApiError::Parse {
            context: "authentication",
            reason: e.to_string(),
        };
        WallabagError::Auth {
            message: format!("Failed to parse authentication response: {}", e),
            source: Some(source),
        }
    })?;

    response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            WallabagError::auth("Authentication successful, but no access token received.")
        })
}
