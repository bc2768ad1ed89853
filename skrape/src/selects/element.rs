//! Selectable wrapper over a parsed element.

use scraper::{ElementRef, Selector};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::defaults::{DefaultElement, DefaultNodeFactory, Placeholder};
use crate::errors::{ElementNotFoundError, InvalidSelectorError, Result};

/// Collapses whitespace runs into single spaces and trims the ends.
pub(crate) fn normalize_whitespace<'s>(parts: impl Iterator<Item = &'s str>) -> String {
    let joined: String = parts.collect();
    let mut out = String::with_capacity(joined.len());
    for word in joined.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// The node behind a [`DocElement`].
#[derive(Debug, Clone, PartialEq)]
enum Node<'a> {
    Parsed(ElementRef<'a>),
    Placeholder(Placeholder),
}

/// A parsed element plus the relaxed selection policy.
///
/// Derived views are computed on first read and cached for the lifetime of
/// the wrapper. The underlying tree is borrowed from a [`Doc`](super::Doc)
/// and never mutated.
#[derive(Clone)]
pub struct DocElement<'a> {
    node: Node<'a>,
    relaxed: bool,
    defaults: DefaultElement,
    text: OnceCell<String>,
    html: OnceCell<String>,
    outer_html: OnceCell<String>,
    all_elements: OnceCell<Vec<DocElement<'a>>>,
}

impl<'a> DocElement<'a> {
    /// Wraps a parsed element.
    #[must_use]
    pub fn new(element: ElementRef<'a>, relaxed: bool, defaults: DefaultElement) -> Self {
        Self::from_node(Node::Parsed(element), relaxed, defaults)
    }

    /// Wraps a synthesized placeholder.
    #[must_use]
    pub fn placeholder(placeholder: Placeholder, relaxed: bool, defaults: DefaultElement) -> Self {
        Self::from_node(Node::Placeholder(placeholder), relaxed, defaults)
    }

    fn from_node(node: Node<'a>, relaxed: bool, defaults: DefaultElement) -> Self {
        Self {
            node,
            relaxed,
            defaults,
            text: OnceCell::new(),
            html: OnceCell::new(),
            outer_html: OnceCell::new(),
            all_elements: OnceCell::new(),
        }
    }

    /// Replaces the default-element strategy.
    #[must_use]
    pub fn with_defaults(mut self, defaults: DefaultElement) -> Self {
        self.defaults = defaults;
        self.all_elements = OnceCell::new();
        self
    }

    fn child(&self, element: ElementRef<'a>) -> Self {
        Self::new(element, self.relaxed, self.defaults.for_children())
    }

    /// Whether empty selections yield a default element instead of failing.
    #[must_use]
    pub const fn relaxed(&self) -> bool {
        self.relaxed
    }

    /// The wrapped parsed element, `None` for a placeholder.
    #[must_use]
    pub fn element(&self) -> Option<ElementRef<'a>> {
        match &self.node {
            Node::Parsed(element) => Some(*element),
            Node::Placeholder(_) => None,
        }
    }

    /// Whether this element was synthesized for a missing match.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.node, Node::Placeholder(_))
    }

    /// Lower-case tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        match &self.node {
            Node::Parsed(element) => element.value().name(),
            Node::Placeholder(placeholder) => &placeholder.tag_name,
        }
    }

    /// Combined text of this element and its descendants, whitespace normalized.
    ///
    /// For `<p>Hello <b>there</b> now! </p>` this is `"Hello there now!"`.
    pub fn text(&self) -> &str {
        self.text.get_or_init(|| match &self.node {
            Node::Parsed(element) => normalize_whitespace(element.text()),
            Node::Placeholder(_) => String::new(),
        })
    }

    /// Inner HTML: on a `<div>` with one empty `<p>` this is `<p></p>`.
    pub fn html(&self) -> &str {
        self.html.get_or_init(|| match &self.node {
            Node::Parsed(element) => element.inner_html(),
            Node::Placeholder(_) => String::new(),
        })
    }

    /// Outer HTML: the element's own markup plus its children.
    pub fn outer_html(&self) -> &str {
        self.outer_html.get_or_init(|| match &self.node {
            Node::Parsed(element) => element.html(),
            Node::Placeholder(placeholder) => placeholder.outer_html(),
        })
    }

    /// This element followed by all descendant elements, in document order.
    pub fn all_elements(&self) -> &[DocElement<'a>] {
        self.all_elements.get_or_init(|| match &self.node {
            Node::Parsed(element) => element
                .descendants()
                .filter_map(ElementRef::wrap)
                .map(|descendant| {
                    if descendant == *element {
                        Self::new(descendant, self.relaxed, self.defaults.clone())
                    } else {
                        self.child(descendant)
                    }
                })
                .collect(),
            Node::Placeholder(placeholder) => vec![Self::placeholder(
                placeholder.clone(),
                self.relaxed,
                self.defaults.clone(),
            )],
        })
    }

    /// Attribute value for `key`, or an empty string when absent.
    #[must_use]
    pub fn attribute(&self, key: &str) -> String {
        self.attr(key).unwrap_or_default().to_string()
    }

    /// Attribute value for `key`, `None` when absent.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.element().and_then(|element| element.value().attr(key))
    }

    /// Whether the attribute `key` is present, even with an empty value.
    #[must_use]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    /// All attributes of this element.
    #[must_use]
    pub fn attributes(&self) -> HashMap<String, String> {
        self.element()
            .map(|element| {
                element
                    .value()
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Selects matching elements below this one.
    ///
    /// An empty selector returns [`all_elements`](Self::all_elements), this
    /// element included. Otherwise every descendant is a candidate, direct
    /// children included, and this element never is. Combinators are
    /// evaluated against the whole document, so `div li` also matches when
    /// the `div` is an ancestor of this element.
    /// Without a match a relaxed element returns its default element, a strict
    /// one fails with [`ElementNotFoundError`].
    pub fn select(&self, selector: &str) -> Result<Vec<DocElement<'a>>> {
        if selector.is_empty() {
            return Ok(self.all_elements().to_vec());
        }

        let compiled = Selector::parse(selector)
            .map_err(|e| InvalidSelectorError::new(selector, e.to_string()))?;

        let matched: Vec<DocElement<'a>> = match &self.node {
            Node::Parsed(element) => element
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .filter(|candidate| compiled.matches(candidate))
                .map(|found| self.child(found))
                .collect(),
            Node::Placeholder(_) => Vec::new(),
        };

        if matched.is_empty() {
            return Ok(vec![self.make_default(selector)?]);
        }
        Ok(matched)
    }

    /// First element matching `selector`.
    pub fn select_first(&self, selector: &str) -> Result<DocElement<'a>> {
        self.select(selector)?
            .into_iter()
            .next()
            .map_or_else(|| self.make_default(selector), Ok)
    }

    /// The fallback for a selection that matched nothing.
    ///
    /// Relaxed elements get a placeholder from their default strategy; strict
    /// elements fail without consulting the strategy.
    pub fn make_default(&self, selector: &str) -> Result<DocElement<'a>> {
        if !self.relaxed {
            return Err(ElementNotFoundError::new(selector).into());
        }

        debug!(selector, tag = self.tag_name(), "No match, using default element");
        let defaults = self.defaults.for_children();
        Ok(Self::placeholder(
            self.defaults.create(selector),
            self.relaxed,
            defaults,
        ))
    }
}

impl PartialEq for DocElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.relaxed == other.relaxed
    }
}

impl fmt::Debug for DocElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocElement")
            .field("tag_name", &self.tag_name())
            .field("relaxed", &self.relaxed)
            .field("placeholder", &self.is_placeholder())
            .finish()
    }
}

impl fmt::Display for DocElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.outer_html())
    }
}
