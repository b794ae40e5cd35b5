// GitHub API HTTP client.
// Unauthenticated GET requests; error payloads are detected by body, not status.

use std::time::Duration;

use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;

use crate::error::{LauncherError, Result};

use super::types::error_message;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client bound to one API base URL.
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    /// Create a client for `api_base` with a per-request timeout.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("pages-launcher"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|source| LauncherError::RemoteRequestFailed {
                url: api_base.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL that endpoint paths are appended to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// GET a JSON document from an absolute URL.
    ///
    /// A JSON object carrying a `message` key is GitHub's error convention and
    /// is rejected whatever the HTTP status was.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| request_failed(url, source))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|source| request_failed(url, source))?;

        match error_message(&payload) {
            Some(message) => Err(LauncherError::RemoteInvalidResponse {
                url: url.to_string(),
                message,
            }),
            None => Ok(payload),
        }
    }

    /// GET raw bytes from an absolute URL.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| request_failed(url, source))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| request_failed(url, source))?;
        Ok(bytes.to_vec())
    }
}

fn request_failed(url: &str, source: reqwest::Error) -> LauncherError {
    LauncherError::RemoteRequestFailed {
        url: url.to_string(),
        source,
    }
}
