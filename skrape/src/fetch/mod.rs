//! Fetching documents over HTTP.
//!
//! This module provides:
//! - `Request`: the configuration of a single fetch
//! - `Fetcher`: the transport protocol, with an HTTP implementation
//! - Observability callbacks for fetch operations

#[cfg(feature = "http")]
mod client;
mod config;
mod protocols;

#[cfg(feature = "http")]
pub use client::HttpFetcher;
pub use config::{Method, Request};
pub use protocols::{
    fetch_document, FetchObserver, FetchResult, Fetcher, LoggingFetchObserver, NoOpFetchObserver,
};
