//! Mock fetchers for testing.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::{Result, SkrapeError};
use crate::fetch::{FetchResult, Fetcher, Request};

/// A fetcher that records requests and returns a configurable response.
#[derive(Debug)]
pub struct StaticFetcher {
    result: Mutex<FetchResult>,
    requests: Mutex<Vec<Request>>,
}

impl StaticFetcher {
    /// Creates a fetcher answering every request with `result`.
    #[must_use]
    pub fn new(result: FetchResult) -> Self {
        Self {
            result: Mutex::new(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a fetcher answering every request with a 200 HTML page.
    #[must_use]
    pub fn with_html(html: impl Into<String>) -> Self {
        Self::new(FetchResult::ok("http://localhost:8080", html))
    }

    /// Sets the response to return.
    pub fn set_result(&self, result: FetchResult) {
        *self.result.lock() = result;
    }

    /// Returns the number of times the fetcher was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns the requests from each call.
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.requests.lock().clear();
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, request: &Request) -> Result<FetchResult> {
        self.requests.lock().push(request.clone());
        let mut result = self.result.lock().clone();
        result.final_url.clone_from(&request.url);
        Ok(result)
    }
}

/// A fetcher that always fails.
#[derive(Debug, Clone)]
pub struct FailingFetcher {
    status: Option<u16>,
    message: String,
}

impl FailingFetcher {
    /// Creates a fetcher failing with a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a fetcher failing with an HTTP status error.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: String::new(),
        }
    }
}

#[async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self, request: &Request) -> Result<FetchResult> {
        Err(match self.status {
            Some(status) => SkrapeError::HttpStatus {
                status,
                url: request.url.clone(),
            },
            None => SkrapeError::Transport(self.message.clone()),
        })
    }
}
