//! HTTP access to the CI server.
//!
//! Sources talk to the network through [`HttpFetch`] so the discovery logic
//! can be exercised against canned responses.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{SourceError, SourceResult};

/// Fetches the body of a URL as text.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET `url` and return the response body.
    ///
    /// A missing resource is reported as [`SourceError::NotFound`].
    async fn get_text(&self, url: &str) -> SourceResult<String>;
}

/// GET `url` and decode the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(http: &dyn HttpFetch, url: &str) -> SourceResult<T> {
    let body = http.get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| SourceError::InvalidResponse(format!("{url}: {e}")))
}

/// Append a path to a CI resource URL.
///
/// CI servers report resource URLs with a trailing slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// [`HttpFetch`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get_text(&self, url: &str) -> SourceResult<String> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status.as_u16() == 404 {
            return Err(SourceError::NotFound(url.to_string()));
        }

        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        Err(SourceError::Api { status: status.as_u16(), message })
    }
}
