//! # Skrape
//!
//! A small DSL for fetching, selecting and asserting on HTML documents.
//!
//! Skrape provides:
//!
//! - **Fetch configuration**: a `Request` describing URL, method, headers,
//!   timeout and redirect/TLS/content policies
//! - **Selection**: CSS selection below any element, with cached text and
//!   markup views and a relaxed mode that never fails on a missing match
//! - **Extraction**: links, images and attribute values of a subtree
//! - **Matchers**: fluent assertions for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use skrape::prelude::*;
//!
//! let doc = Doc::parse(r#"<h1>Hello</h1><a href="/next">next page</a>"#, false);
//! let root = doc.root();
//!
//! to_be(root.select_first("h1")?.text(), "Hello");
//! to_contain_element(&root.each_href(), "/next");
//! to_be_present(&root.select("a")?);
//! # Ok::<(), skrape::errors::SkrapeError>(())
//! ```
//!
//! Fetching requires the `http` feature (enabled by default):
//!
//! ```rust,ignore
//! let fetcher = HttpFetcher::new().with_observer(LoggingFetchObserver);
//! let request = Request::new().with_url("https://skrape.it");
//! let doc = fetch_document(&fetcher, &request, true).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod fetch;
pub mod matchers;
pub mod selects;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::{
        AssertionFailure, ElementNotFoundError, InvalidSelectorError, Result, SkrapeError,
    };
    #[cfg(feature = "http")]
    pub use crate::fetch::HttpFetcher;
    pub use crate::fetch::{
        fetch_document, FetchObserver, FetchResult, Fetcher, LoggingFetchObserver, Method,
        NoOpFetchObserver, Request,
    };
    pub use crate::matchers::{
        to_be, to_be_empty, to_be_not, to_be_not_empty, to_be_present, to_contain,
        to_contain_element, to_end_with, to_match, to_not_be_present, to_not_contain,
        to_start_with, Presence,
    };
    pub use crate::selects::{DefaultElement, DefaultNodeFactory, Doc, DocElement, Placeholder};
}
