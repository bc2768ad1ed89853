//! Request configuration for fetching documents.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// HTTP method used to fetch a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    #[default]
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl Method {
    /// All supported methods.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Head,
        Self::Options,
        Self::Patch,
        Self::Trace,
    ];

    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown HTTP method: {s}"))
    }
}

#[cfg(feature = "http")]
impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
            Method::Patch => Self::PATCH,
            Method::Trace => Self::TRACE,
        }
    }
}

/// Configuration describing how to retrieve a document.
///
/// No validation happens here: malformed URLs are rejected by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Request {
    /// Target URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// HTTP method.
    #[serde(default)]
    pub method: Method,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Additional headers to include.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request timeout in milliseconds, 0 for none.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Whether redirects are followed.
    #[serde(default = "default_true")]
    pub follow_redirects: bool,
    /// Whether non-HTML content types are accepted.
    #[serde(default = "default_true")]
    pub ignore_content_type: bool,
    /// Whether non-success status codes are accepted.
    #[serde(default = "default_true")]
    pub ignore_http_errors: bool,
    /// Whether TLS certificates are validated.
    #[serde(default)]
    pub validate_tls_certificates: bool,
    /// Maximum body size in bytes, 0 for unlimited.
    #[serde(default)]
    pub max_body_size: usize,
}

fn default_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 skrape.it".to_string()
}

const fn default_timeout() -> u64 {
    5000
}

const fn default_true() -> bool {
    true
}

impl Default for Request {
    fn default() -> Self {
        Self {
            url: default_url(),
            method: Method::Get,
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            timeout: default_timeout(),
            follow_redirects: true,
            ignore_content_type: true,
            ignore_http_errors: true,
            validate_tls_certificates: false,
            max_body_size: 0,
        }
    }
}

impl Request {
    /// Creates a new request with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method.
    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout(mut self, millis: u64) -> Self {
        self.timeout = millis;
        self
    }

    /// Sets whether redirects are followed.
    #[must_use]
    pub const fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Sets whether unexpected content types are accepted.
    #[must_use]
    pub const fn with_ignore_content_type(mut self, ignore: bool) -> Self {
        self.ignore_content_type = ignore;
        self
    }

    /// Sets whether non-success status codes are accepted.
    #[must_use]
    pub const fn with_ignore_http_errors(mut self, ignore: bool) -> Self {
        self.ignore_http_errors = ignore;
        self
    }

    /// Sets whether TLS certificates are validated.
    #[must_use]
    pub const fn with_validate_tls_certificates(mut self, validate: bool) -> Self {
        self.validate_tls_certificates = validate;
        self
    }

    /// Sets the maximum body size in bytes.
    #[must_use]
    pub const fn with_max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }

    /// Gets the timeout as a Duration, `None` when infinite.
    #[must_use]
    pub const fn timeout_duration(&self) -> Option<Duration> {
        if self.timeout == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout))
        }
    }

    /// Gets the body limit, `None` when unlimited.
    #[must_use]
    pub const fn body_limit(&self) -> Option<usize> {
        if self.max_body_size == 0 {
            None
        } else {
            Some(self.max_body_size)
        }
    }
}
