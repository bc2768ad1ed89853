//! HTTP fetcher backed by reqwest.

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};
use std::time::Instant;
use tracing::warn;

use super::config::Request;
use super::protocols::{FetchObserver, FetchResult, Fetcher, NoOpFetchObserver};
use crate::errors::{Result, SkrapeError};

#[allow(clippy::expect_used)]
static XML_CONTENT_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(application|text)/\w*\+?xml.*").expect("valid regex"));

/// Whether a response with this content type can be parsed as markup.
pub(crate) fn is_parseable_content_type(content_type: &str) -> bool {
    content_type.starts_with("text/") || XML_CONTENT_TYPE.is_match(content_type)
}

/// Applies the request's status and content-type policies to a response.
pub(crate) fn check_response(
    request: &Request,
    status: u16,
    content_type: Option<&str>,
    url: &str,
) -> Result<()> {
    if !request.ignore_http_errors && !(200..400).contains(&status) {
        warn!(url, status, "Rejecting response status");
        return Err(SkrapeError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    if let Some(content_type) = content_type {
        if !request.ignore_content_type && !is_parseable_content_type(content_type) {
            warn!(url, content_type, "Rejecting response content type");
            return Err(SkrapeError::UnsupportedContentType {
                content_type: content_type.to_string(),
                url: url.to_string(),
            });
        }
    }

    Ok(())
}

/// Appends `chunk` to `body` without exceeding `limit`.
///
/// Returns true once the limit is reached.
pub(crate) fn push_limited(body: &mut Vec<u8>, chunk: &[u8], limit: Option<usize>) -> bool {
    match limit {
        Some(limit) => {
            let room = limit.saturating_sub(body.len());
            body.extend_from_slice(&chunk[..chunk.len().min(room)]);
            body.len() >= limit
        }
        None => {
            body.extend_from_slice(chunk);
            false
        }
    }
}

/// Decodes a response body as UTF-8, replacing invalid sequences.
///
/// The `Content-Type` charset is not consulted.
pub(crate) fn decode_body(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Fetcher performing real HTTP requests.
#[derive(Clone)]
pub struct HttpFetcher {
    observer: Arc<dyn FetchObserver>,
}

impl HttpFetcher {
    /// Creates a fetcher without observability callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoOpFetchObserver),
        }
    }

    /// Sets the observer notified about each fetch.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FetchObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    fn build_client(request: &Request) -> Result<reqwest::Client> {
        let redirect = if request.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let mut builder = reqwest::Client::builder()
            .user_agent(&request.user_agent)
            .redirect(redirect)
            .danger_accept_invalid_certs(!request.validate_tls_certificates);
        if let Some(timeout) = request.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }

    async fn execute(&self, request: &Request, request_id: &str) -> Result<FetchResult> {
        let start = Instant::now();
        let client = Self::build_client(request)?;

        let mut builder = client.request(request.method.into(), &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let mut response = builder.send().await?;
        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        check_response(request, status_code, content_type.as_deref(), &final_url)?;

        let limit = request.body_limit();
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if push_limited(&mut body, &chunk, limit) {
                break;
            }
        }

        Ok(FetchResult {
            request_id: request_id.to_string(),
            status_code,
            headers,
            text: decode_body(&body),
            final_url,
            content_type,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
            fetched_at: Utc::now(),
        })
    }

    /// Performs the request on a private current-thread runtime.
    ///
    /// Must not be called from within an async context.
    pub fn fetch_blocking(&self, request: &Request) -> Result<FetchResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.fetch(request))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &Request) -> Result<FetchResult> {
        let request_id = uuid::Uuid::new_v4().to_string();
        self.observer.on_fetch_start(&request.url, &request_id);

        match self.execute(request, &request_id).await {
            Ok(result) => {
                self.observer.on_fetch_complete(
                    &request.url,
                    &request_id,
                    result.duration_ms,
                    result.status_code,
                );
                Ok(result)
            }
            Err(err) => {
                self.observer
                    .on_fetch_error(&request.url, &request_id, &err.to_string());
                Err(err)
            }
        }
    }
}
