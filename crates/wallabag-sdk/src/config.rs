//! Configuration source for the client.
//!
//! Every setting can be passed explicitly to the client; anything left out
//! falls back to the values resolved here, normally from `WALLABAG_*`
//! environment variables.

use std::fmt;

/// Environment variable holding the server base URL
pub const BASE_URL_VAR: &str = "WALLABAG_BASE_URL";
/// Environment variable holding the OAuth client id
pub const CLIENT_ID_VAR: &str = "WALLABAG_CLIENT_ID";
/// Environment variable holding the OAuth client secret
pub const CLIENT_SECRET_VAR: &str = "WALLABAG_CLIENT_SECRET";
/// Environment variable holding the account user name
pub const USERNAME_VAR: &str = "WALLABAG_USERNAME";
/// Environment variable holding the account password
pub const PASSWORD_VAR: &str = "WALLABAG_PASSWORD";

/// Fallback settings for the client
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WallabagConfig {
    /// Server base URL, e.g. `https://wallabag.example.com`
    pub base_url: Option<String>,
    /// OAuth client id
    pub client_id: Option<String>,
    /// OAuth client secret
    pub client_secret: Option<String>,
    /// Account user name
    pub username: Option<String>,
    /// Account password
    pub password: Option<String>,
}

impl WallabagConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary key lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            base_url: get(BASE_URL_VAR),
            client_id: get(CLIENT_ID_VAR),
            client_secret: get(CLIENT_SECRET_VAR),
            username: get(USERNAME_VAR),
            password: get(PASSWORD_VAR),
        }
    }
}

impl fmt::Debug for WallabagConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WallabagConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

pub(crate) fn redact(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "***")
}
