//! Testing utilities for skrape users.
//!
//! This module provides:
//! - Sample documents
//! - Mock fetchers that never touch the network

mod fixtures;
mod mocks;

pub use fixtures::{sample_document, sample_result, SAMPLE_HTML, SAMPLE_URL};
pub use mocks::{FailingFetcher, StaticFetcher};
