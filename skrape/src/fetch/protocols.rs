//! Protocol traits for fetching documents.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::config::Request;
use crate::errors::Result;
use crate::selects::Doc;

/// Result of a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Identifier shared with the observer callbacks.
    pub request_id: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body decoded as UTF-8, truncated to the request's body limit.
    pub text: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// Content type from headers.
    pub content_type: Option<String>,
    /// Time taken to fetch in milliseconds.
    pub duration_ms: f64,
    /// When the response was received.
    pub fetched_at: DateTime<Utc>,
}

impl FetchResult {
    /// Creates a 200 response carrying `text`, received now.
    #[must_use]
    pub fn ok(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            status_code: 200,
            headers: HashMap::new(),
            text: text.into(),
            final_url: url.into(),
            content_type: Some("text/html; charset=utf-8".to_string()),
            duration_ms: 0.0,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the response is HTML.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_ref()
            .is_some_and(|ct| ct.contains("text/html") || ct.contains("application/xhtml"))
    }

    /// Whether the fetch was successful (2xx status).
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Parses the body into a document.
    #[must_use]
    pub fn document(&self, relaxed: bool) -> Doc {
        Doc::parse(&self.text, relaxed)
    }
}

/// Protocol for retrieving documents.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs the request described by `request`.
    async fn fetch(&self, request: &Request) -> Result<FetchResult>;
}

/// Fetches `request` and parses the body.
pub async fn fetch_document<F: Fetcher + ?Sized>(
    fetcher: &F,
    request: &Request,
    relaxed: bool,
) -> Result<Doc> {
    let result = fetcher.fetch(request).await?;
    Ok(result.document(relaxed))
}

/// Observability callbacks for fetch operations.
pub trait FetchObserver: Send + Sync {
    /// Called when a fetch starts.
    fn on_fetch_start(&self, url: &str, request_id: &str);

    /// Called when a fetch completes.
    fn on_fetch_complete(&self, url: &str, request_id: &str, duration_ms: f64, status_code: u16);

    /// Called when a fetch fails.
    fn on_fetch_error(&self, url: &str, request_id: &str, error: &str);
}

/// No-op implementation of FetchObserver.
#[derive(Debug, Clone, Default)]
pub struct NoOpFetchObserver;

impl FetchObserver for NoOpFetchObserver {
    fn on_fetch_start(&self, _url: &str, _request_id: &str) {}
    fn on_fetch_complete(&self, _url: &str, _request_id: &str, _duration_ms: f64, _status_code: u16) {}
    fn on_fetch_error(&self, _url: &str, _request_id: &str, _error: &str) {}
}

/// Observer that writes fetch lifecycle events to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingFetchObserver;

impl FetchObserver for LoggingFetchObserver {
    fn on_fetch_start(&self, url: &str, request_id: &str) {
        tracing::info!(url, request_id, "Fetch started");
    }

    fn on_fetch_complete(&self, url: &str, request_id: &str, duration_ms: f64, status_code: u16) {
        tracing::info!(url, request_id, duration_ms, status_code, "Fetch completed");
    }

    fn on_fetch_error(&self, url: &str, request_id: &str, error: &str) {
        tracing::error!(url, request_id, error, "Fetch failed");
    }
}
