//! HTTP client for the NoasaCrypto reasons API.

use std::time::Duration;

use reqwest::{header, StatusCode};
use url::Url;

use crate::{
    config::ClientConfig,
    types::{ErrorBody, ReasonResult},
    user_agent::get_user_agent,
    Error,
};

const CATEGORY_NOT_FOUND: &str = "Category not found";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Which endpoint a response came from. Only the by-category endpoint gives
/// 404 the meaning "no such category".
#[derive(Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Random,
    ByCategory,
}

/// HTTP client for the NoasaCrypto reasons API.
///
/// Holds one pooled `reqwest::Client` for its whole lifetime. The pool is
/// released when the client is dropped, so every exit from the owning scope
/// (including early returns through `?`) cleans up; [`Client::close`] does the
/// same thing explicitly.
///
/// The client is `Send + Sync`. Share it across tasks behind an `Arc` and the
/// underlying pool serves concurrent requests. No request is ever retried.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a client pointing at the public deployment with the default timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let config = config.validated()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Endpoint root with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Fetches a random reason from any category.
    ///
    /// A 404 here is reported as [`Error::Api`] like any other failure status.
    pub async fn get_random_reason(&self) -> Result<ReasonResult, Error> {
        let url = self.get_url(None)?;
        self.get(url, Endpoint::Random).await
    }

    /// Fetches a random reason from one category.
    ///
    /// Accepts a [`Category`](crate::types::Category) or any raw id string; the
    /// server decides whether it exists and answers 404, reported as
    /// [`Error::CategoryNotFound`], when it does not.
    pub async fn get_reason_by_category(
        &self,
        category: impl AsRef<str>,
    ) -> Result<ReasonResult, Error> {
        let url = self.get_url(Some(category.as_ref()))?;
        self.get(url, Endpoint::ByCategory).await
    }

    /// Releases the connection pool. Equivalent to dropping the client.
    pub fn close(self) {
        tracing::debug!("Closing client for {}", self.config.base_url);
    }

    fn get_url(&self, category_id: Option<&str>) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}/api/reasons", self.config.base_url).as_str())
            .map_err(|e| Error::InvalidConfig(format!("Invalid URL constructed: {}", e)))?;
        if let Some(id) = category_id {
            url.path_segments_mut()
                .map_err(|_| {
                    Error::InvalidConfig(format!("{} cannot carry a path", self.config.base_url))
                })?
                .push(id);
        }
        Ok(url)
    }

    async fn get(&self, url: Url, endpoint: Endpoint) -> Result<ReasonResult, Error> {
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| connection_error(&url, &e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| connection_error(&url, &e))?;
        tracing::debug!("GET {} answered {}", url, status);

        classify(status, &body, endpoint)
    }
}

/// Maps a received response to a reason or a typed error.
fn classify(status: StatusCode, body: &str, endpoint: Endpoint) -> Result<ReasonResult, Error> {
    if status == StatusCode::NOT_FOUND && endpoint == Endpoint::ByCategory {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| CATEGORY_NOT_FOUND.to_string());
        tracing::warn!("Category not found: {}", message);
        return Err(Error::CategoryNotFound(message));
    }

    if !status.is_success() {
        let message = error_message(body);
        tracing::warn!("Request failed with status {}: {}", status, message);
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str::<ReasonResult>(body).map_err(|e| {
        tracing::warn!(
            "Failed to parse reason: {} | body: {}",
            e,
            truncate_body(body)
        );
        Error::Api {
            status: status.as_u16(),
            message: format!("Failed to decode response: {}", e),
        }
    })
}

/// Server message for a failure status: the JSON `error` field, else the raw
/// body, else a generic fallback.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        Err(_) if !body.trim().is_empty() => truncate_body(body),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}

fn connection_error(url: &Url, e: &reqwest::Error) -> Error {
    let cause = if e.is_timeout() {
        "request timed out".to_string()
    } else {
        let mut cause = e.to_string();
        let mut source = std::error::Error::source(e);
        while let Some(inner) = source {
            cause.push_str(": ");
            cause.push_str(&inner.to_string());
            source = inner.source();
        }
        cause
    };
    tracing::warn!("Failed to reach {}: {}", url, cause);
    Error::Connection {
        url: url.to_string(),
        cause,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
