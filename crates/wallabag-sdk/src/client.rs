//! Wallabag client implementation.

use crate::auth::{parse_token_response, Credentials};
use crate::config::{WallabagConfig, BASE_URL_VAR};
use crate::error::{ApiError, WallabagError};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};
use wallabag_domain::{Article, GetArticlesRequest, GetSingleArticleRequest, SearchArticlesRequest};

/// Wallabag API client
///
/// Holds the server base URL and, once [`authenticate`](Self::authenticate)
/// has succeeded, the bearer token used by every read operation.
pub struct WallabagClient {
    base_url: String,
    access_token: Option<String>,
    http: Option<reqwest::Client>,
    config: WallabagConfig,
}

impl WallabagClient {
    /// Create a client, falling back to `WALLABAG_*` environment variables
    ///
    /// A supplied `http` client is reused for every request; without one a
    /// fresh client is built per request and dropped when it completes.
    pub fn new(base_url: Option<&str>, http: Option<reqwest::Client>) -> Result<Self, WallabagError> {
        Self::with_config(base_url, http, WallabagConfig::from_env())
    }

    /// Create a client with an explicit fallback configuration
    pub fn with_config(
        base_url: Option<&str>,
        http: Option<reqwest::Client>,
        config: WallabagConfig,
    ) -> Result<Self, WallabagError> {
        let base_url = base_url
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| config.base_url.clone())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                WallabagError::Config(format!(
                    "Wallabag base URL is not set. Provide it or set {} environment variable.",
                    BASE_URL_VAR
                ))
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            http,
            config,
        })
    }

    /// Server base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a token has been obtained
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Exchange credentials for an access token
    ///
    /// Missing credential fields are taken from the configuration. On
    /// success the token is stored and `true` is returned; calling this
    /// again re-authenticates.
    pub async fn authenticate(&mut self, credentials: Credentials) -> Result<bool, WallabagError> {
        let query = credentials.resolve(&self.config)?.into_query();
        let url = format!("{}/oauth/v2/token", self.base_url);

        let body = self
            .request(Method::GET, &url, &query, None)
            .await
            .map_err(|e| WallabagError::Auth {
                message: format!("Authentication failed: {}", e),
                source: Some(e),
            })?;

        let token = parse_token_response(&body)?;
        self.access_token = Some(token);
        info!(base_url = %self.base_url, "Authenticated with Wallabag");

        Ok(true)
    }

    /// Fetch one article by id
    pub async fn get_single_article(
        &self,
        req: &GetSingleArticleRequest,
    ) -> Result<Article, WallabagError> {
        let token = self.token()?;
        let url = format!("{}/api/entries/{}", self.base_url, req.id);

        let body = self.request(Method::GET, &url, &[], Some(token)).await?;
        let payload = parse_json(&body, "article")?;

        Ok(serde_json::from_value::<Article>(payload).map_err(|e| ApiError::Deserialize(e.to_string()))?)
    }

    /// List saved articles
    pub async fn get_articles(&self, req: &GetArticlesRequest) -> Result<Vec<Article>, WallabagError> {
        let token = self.token()?;
        let url = format!("{}/api/entries", self.base_url);

        let mut query = vec![
            ("archive", if req.is_archived { "1" } else { "0" }.to_string()),
            ("perPage", req.page_size().to_string()),
            ("since", req.since_timestamp().to_string()),
            ("order", req.sort_order.as_str().to_string()),
            (
                "detail",
                if req.include_content { "full" } else { "metadata" }.to_string(),
            ),
        ];
        if let Some(domain) = req.domain_filter() {
            query.push(("domain_name", domain.to_string()));
        }

        let body = self.request(Method::GET, &url, &query, Some(token)).await?;
        Ok(embedded_articles(parse_json(&body, "articles")?)?)
    }

    /// Full-text search over saved articles
    pub async fn search_articles(
        &self,
        req: &SearchArticlesRequest,
    ) -> Result<Vec<Article>, WallabagError> {
        let token = self.token()?;
        let url = format!("{}/api/search", self.base_url);

        let query = [
            ("term", req.search_term.clone()),
            ("perPage", req.page_size().to_string()),
        ];

        let body = self.request(Method::GET, &url, &query, Some(token)).await?;
        Ok(embedded_articles(parse_json(&body, "articles")?)?)
    }

    fn token(&self) -> Result<&str, WallabagError> {
        self.access_token
            .as_deref()
            .ok_or_else(|| WallabagError::auth("Access token is not set. Please authenticate first."))
    }

    /// Issue one request and return the body of a 2xx response
    async fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<String, ApiError> {
        // A locally built client lives only for this call.
        let local;
        let http = match &self.http {
            Some(http) => http,
            None => {
                local = reqwest::Client::builder().build()?;
                &local
            }
        };

        debug!(%method, url, "Sending Wallabag request");

        let mut builder = http.request(method, url).query(query);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), url, "Wallabag request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn parse_json(body: &str, context: &'static str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse {
        context,
        reason: e.to_string(),
    })
}

/// Articles listed under `_embedded.items`; a missing list means no results
fn embedded_articles(mut payload: Value) -> Result<Vec<Article>, ApiError> {
    match payload.pointer_mut("/_embedded/items").map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).map_err(|e| ApiError::Deserialize(e.to_string())),
    }
}
