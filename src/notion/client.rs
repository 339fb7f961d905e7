//! Blocking Notion API client for the page viewer.
//!
//! One synchronous request per page-ID submission, no retries, no pooling
//! beyond what `reqwest` does internally. Transport and status failures map
//! onto the [`DashboardError`] fetch variants so a caller can surface a
//! message instead of crashing the session.

use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::{Page, PageMetadata};

// ---------------------------------------------------------------------------
// NotionClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`NotionClient`].
pub struct NotionClientBuilder {
    token: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl Default for NotionClientBuilder {
    fn default() -> Self {
        Self {
            token: None,
            base_url: config::NOTION_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl NotionClientBuilder {
    /// Set the integration bearer token explicitly.
    ///
    /// If not set, the token is read from the environment variable named by
    /// [`config::NOTION_TOKEN_ENV`] at build time.
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the API base URL. Used by tests to point at a mock server.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`DashboardError::MissingToken`] when no token was supplied
    /// and the environment variable is unset or empty.
    pub fn build(self) -> Result<NotionClient> {
        let token = match self.token {
            Some(t) => t,
            None => env::var(config::NOTION_TOKEN_ENV)
                .ok()
                .filter(|t| !t.is_empty())
                .ok_or(DashboardError::MissingToken)?,
        };

        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(NotionClient {
            token,
            base_url: self.base_url,
            client,
        })
    }
}

// ---------------------------------------------------------------------------
// NotionClient
// ---------------------------------------------------------------------------

/// Client for retrieving Notion pages by identifier.
///
/// Created via [`NotionClient::builder()`].
#[derive(Debug)]
pub struct NotionClient {
    token: String,
    base_url: String,
    client: Client,
}

impl NotionClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> NotionClientBuilder {
        NotionClientBuilder::default()
    }

    /// Retrieve a page document by its identifier.
    ///
    /// Issues one blocking `GET /v1/pages/{page_id}` with the bearer token
    /// and the `Notion-Version` header. Status mapping: 404 becomes
    /// [`DashboardError::PageNotFound`], 401/403 become
    /// [`DashboardError::Unauthorized`], any other non-2xx becomes
    /// [`DashboardError::Api`] carrying the message from the error body when
    /// one is present. Transport failures surface as
    /// [`DashboardError::Http`].
    pub fn retrieve_page(&self, page_id: &str) -> Result<Page> {
        let url = format!("{}/v1/pages/{}", self.base_url, page_id);

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", config::NOTION_API_VERSION)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let message = error_message(resp);
            return Err(match status {
                StatusCode::NOT_FOUND => DashboardError::PageNotFound(page_id.to_string()),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    DashboardError::Unauthorized(message)
                }
                other => DashboardError::Api {
                    status: other.as_u16(),
                    message,
                },
            });
        }

        Ok(resp.json::<Page>()?)
    }

    /// Retrieve a page and extract its metadata (title with the `"Untitled"`
    /// fallback, plus verbatim timestamps and URL).
    pub fn page_metadata(&self, page_id: &str) -> Result<PageMetadata> {
        Ok(self.retrieve_page(page_id)?.metadata())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Best-effort message from a Notion error body.
///
/// The API returns `{"object": "error", "message": "..."}` on failure; fall
/// back to the raw body, then to the status reason, when that shape is
/// missing.
fn error_message(resp: reqwest::blocking::Response) -> String {
    let status = resp.status();
    let body = resp.text().unwrap_or_default();

    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                body
            }
        })
}
