//! Parsed HTML documents.

use scraper::{Html, Selector};

use super::defaults::DefaultElement;
use super::element::DocElement;
use crate::errors::Result;

/// An owned, parsed HTML document.
///
/// Every [`DocElement`] borrows from the `Doc` it was selected from.
pub struct Doc {
    html: Html,
    relaxed: bool,
}

impl Doc {
    /// Parses a complete HTML document.
    #[must_use]
    pub fn parse(html: &str, relaxed: bool) -> Self {
        Self {
            html: Html::parse_document(html),
            relaxed,
        }
    }

    /// Parses an HTML fragment.
    #[must_use]
    pub fn parse_fragment(html: &str, relaxed: bool) -> Self {
        Self {
            html: Html::parse_fragment(html),
            relaxed,
        }
    }

    /// Whether selections on this document degrade to default elements.
    #[must_use]
    pub const fn relaxed(&self) -> bool {
        self.relaxed
    }

    /// The root element (`<html>`), in document context.
    #[must_use]
    pub fn root(&self) -> DocElement<'_> {
        DocElement::new(self.html.root_element(), self.relaxed, DefaultElement::Document)
    }

    /// Selects below the root element.
    pub fn select(&self, selector: &str) -> Result<Vec<DocElement<'_>>> {
        self.root().select(selector)
    }

    /// Text of the `<title>` element, or an empty string.
    #[must_use]
    pub fn title_text(&self) -> String {
        Selector::parse("title")
            .ok()
            .and_then(|sel| self.html.select(&sel).next())
            .map(|title| super::element::normalize_whitespace(title.text()))
            .unwrap_or_default()
    }

    /// Parser errors collected while building the tree.
    #[must_use]
    pub fn parse_errors(&self) -> &[std::borrow::Cow<'static, str>] {
        &self.html.errors
    }
}

impl std::fmt::Debug for Doc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Doc")
            .field("relaxed", &self.relaxed)
            .field("html", &self.html.html())
            .finish()
    }
}
