//! HTTP page fetcher for soccerwiki.org
//!
//! This module provides the `PageSource` seam used by the crawler and the
//! reqwest-backed client that implements it. The client sends exactly one
//! GET per page and hands back whatever body the server returned.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{FetchError, Result, SoccerwikiError};
use crate::types::Page;

/// Base URL for the Vietnamese soccerwiki mirror
pub const SOCCERWIKI_BASE_URL: &str = "https://vi.soccerwiki.org";

/// The site rejects requests without a browser-like agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Anything that can turn a `Page` into raw markup.
///
/// The crawler only talks to pages through this trait, so tests can
/// substitute canned markup for the network.
pub trait PageSource: Send + Sync {
    /// Fetch the markup of one page
    fn fetch(&self, page: &Page) -> impl Future<Output = std::result::Result<String, FetchError>> + Send;
}

/// Configuration for the soccerwiki HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host every page path is appended to
    pub base_url: String,
    /// Value of the `User-Agent` header (must not be empty)
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SOCCERWIKI_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for soccerwiki.org
///
/// No retries and no throttling: each `fetch` is a single request.
#[derive(Debug, Clone)]
pub struct SoccerwikiClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl SoccerwikiClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `SoccerwikiError::Config` if the user agent is blank
    /// - `SoccerwikiError::Client` if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.user_agent.trim().is_empty() {
            return Err(SoccerwikiError::Config(
                "user agent must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of a page
    pub fn url_for(&self, page: &Page) -> String {
        format!("{}{}", self.base_url, page.path())
    }

    /// Fetch the body of a page.
    ///
    /// The body is returned for every status code; an error page is left
    /// for the parser to reject.
    ///
    /// # Errors
    /// `FetchError` on connection, timeout or body-read failure
    pub async fn fetch_page(&self, page: &Page) -> std::result::Result<String, FetchError> {
        let url = self.url_for(page);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "non-success status, passing body to parser");
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError {
                url: url.clone(),
                source,
            })?;

        debug!(%url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

impl PageSource for SoccerwikiClient {
    async fn fetch(&self, page: &Page) -> std::result::Result<String, FetchError> {
        self.fetch_page(page).await
    }
}
