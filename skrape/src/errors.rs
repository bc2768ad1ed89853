//! Error types for skrape.
//!
//! Selection, fetching and assertion failures are all immediate: nothing in
//! this crate retries or recovers locally.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for skrape operations.
#[derive(Debug, Error)]
pub enum SkrapeError {
    /// A strict selection matched nothing.
    #[error("{0}")]
    ElementNotFound(#[from] ElementNotFoundError),

    /// A selector could not be parsed.
    #[error("{0}")]
    InvalidSelector(#[from] InvalidSelectorError),

    /// The server answered with a non-success status and HTTP errors are not ignored.
    #[error("HTTP error fetching URL '{url}': status {status}")]
    HttpStatus {
        /// The response status code.
        status: u16,
        /// The URL that was fetched.
        url: String,
    },

    /// The response content type is not parseable and content types are not ignored.
    #[error("Unhandled content type '{content_type}' for URL '{url}'")]
    UnsupportedContentType {
        /// The content type reported by the server.
        content_type: String,
        /// The URL that was fetched.
        url: String,
    },

    /// The transport failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkrapeError {
    /// Whether this error was raised by a selection rather than by fetching.
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::ElementNotFound(_) | Self::InvalidSelector(_))
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::ElementNotFound(err) => {
                map.insert("type".to_string(), serde_json::json!("ElementNotFound"));
                map.insert("selector".to_string(), serde_json::json!(err.selector));
            }
            Self::InvalidSelector(err) => {
                map.insert("type".to_string(), serde_json::json!("InvalidSelector"));
                map.insert("selector".to_string(), serde_json::json!(err.selector));
                map.insert("reason".to_string(), serde_json::json!(err.reason));
            }
            Self::HttpStatus { status, url } => {
                map.insert("type".to_string(), serde_json::json!("HttpStatus"));
                map.insert("status".to_string(), serde_json::json!(status));
                map.insert("url".to_string(), serde_json::json!(url));
            }
            Self::UnsupportedContentType { content_type, url } => {
                map.insert("type".to_string(), serde_json::json!("UnsupportedContentType"));
                map.insert("content_type".to_string(), serde_json::json!(content_type));
                map.insert("url".to_string(), serde_json::json!(url));
            }
            Self::Transport(_) => {
                map.insert("type".to_string(), serde_json::json!("Transport"));
            }
            Self::Io(_) => {
                map.insert("type".to_string(), serde_json::json!("Io"));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for SkrapeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Error raised when a strict selection finds no element.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Could not find element '{selector}'")]
pub struct ElementNotFoundError {
    /// The raw selector that matched nothing.
    pub selector: String,
}

impl ElementNotFoundError {
    /// Creates a new element not found error.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

/// Error raised when a selector string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid selector '{selector}': {reason}")]
pub struct InvalidSelectorError {
    /// The raw selector.
    pub selector: String,
    /// Parser diagnostic.
    pub reason: String,
}

impl InvalidSelectorError {
    /// Creates a new invalid selector error.
    #[must_use]
    pub fn new(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}

/// A failed matcher expectation.
///
/// Matchers panic with this value's message, which is how a failure reaches
/// the test harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    /// Human-readable description of the mismatch.
    pub message: String,
}

impl AssertionFailure {
    /// Creates a new assertion failure.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a failure of the form "expected X but was Y".
    #[must_use]
    pub fn expected(expected: impl std::fmt::Debug, actual: impl std::fmt::Debug) -> Self {
        Self::new(format!("expected: <{expected:?}> but was: <{actual:?}>"))
    }
}

/// Result alias for skrape operations.
pub type Result<T> = std::result::Result<T, SkrapeError>;
