//! Default elements synthesized when a relaxed selection matches nothing.

use std::fmt;
use std::sync::Arc;

/// An empty synthetic element standing in for a missing match.
///
/// It has no attributes and no children, so its text and inner html are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Tag name rendered by `outer_html`.
    pub tag_name: String,
    /// The selector that produced no match.
    pub selector: String,
}

impl Placeholder {
    /// Creates a new placeholder.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            selector: selector.into(),
        }
    }

    /// Markup of the placeholder itself.
    #[must_use]
    pub fn outer_html(&self) -> String {
        format!("<{0}></{0}>", self.tag_name)
    }
}

/// Creates the fallback node for a selector that matched nothing.
///
/// Only ever invoked for relaxed elements.
pub trait DefaultNodeFactory: Send + Sync + fmt::Debug {
    /// Creates a placeholder for `selector`.
    fn create(&self, selector: &str) -> Placeholder;
}

/// Default-element strategy, chosen by traversal context.
#[derive(Debug, Clone, Default)]
pub enum DefaultElement {
    /// Root of a document: an empty `<html>` element.
    Document,
    /// An element reached by selection: an empty `<div>` element.
    #[default]
    Element,
    /// A caller-supplied factory.
    Custom(Arc<dyn DefaultNodeFactory>),
}

impl DefaultElement {
    /// Wraps a custom factory.
    #[must_use]
    pub fn custom(factory: impl DefaultNodeFactory + 'static) -> Self {
        Self::Custom(Arc::new(factory))
    }

    /// Strategy for elements selected below a node using this one.
    ///
    /// Custom factories are inherited; the document context becomes element context.
    #[must_use]
    pub fn for_children(&self) -> Self {
        match self {
            Self::Custom(factory) => Self::Custom(Arc::clone(factory)),
            Self::Document | Self::Element => Self::Element,
        }
    }
}

impl DefaultNodeFactory for DefaultElement {
    fn create(&self, selector: &str) -> Placeholder {
        match self {
            Self::Document => Placeholder::new("html", selector),
            Self::Element => Placeholder::new("div", selector),
            Self::Custom(factory) => factory.create(selector),
        }
    }
}
