//! Selection and extraction over parsed HTML.
//!
//! This module provides:
//! - `Doc`: an owned, parsed document
//! - `DocElement`: a selectable element wrapper with cached derived views
//! - Default elements for relaxed selections
//! - Link, image and attribute extraction helpers

mod defaults;
mod document;
mod element;
mod extraction;
mod find;

#[cfg(test)]
mod element_tests;

pub use defaults::{DefaultElement, DefaultNodeFactory, Placeholder};
pub use document::Doc;
pub use element::DocElement;
