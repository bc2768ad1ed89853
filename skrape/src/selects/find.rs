//! Positional helpers on top of [`DocElement::select`].

use super::element::DocElement;
use crate::errors::Result;

impl<'a> DocElement<'a> {
    /// All elements matching `selector`.
    pub fn find_all(&self, selector: &str) -> Result<Vec<DocElement<'a>>> {
        self.select(selector)
    }

    /// The element at `index` among the matches of `selector`.
    ///
    /// An index past the last match follows the relaxed policy.
    pub fn find_by_index(&self, selector: &str, index: usize) -> Result<DocElement<'a>> {
        self.select(selector)?
            .into_iter()
            .nth(index)
            .map_or_else(|| self.make_default(selector), Ok)
    }

    /// First match of `selector`.
    pub fn find_first(&self, selector: &str) -> Result<DocElement<'a>> {
        self.find_by_index(selector, 0)
    }

    /// Second match of `selector`.
    pub fn find_second(&self, selector: &str) -> Result<DocElement<'a>> {
        self.find_by_index(selector, 1)
    }

    /// Third match of `selector`.
    pub fn find_third(&self, selector: &str) -> Result<DocElement<'a>> {
        self.find_by_index(selector, 2)
    }

    /// Last match of `selector`.
    pub fn find_last(&self, selector: &str) -> Result<DocElement<'a>> {
        self.select(selector)?
            .pop()
            .map_or_else(|| self.make_default(selector), Ok)
    }

    /// Text of every match of `selector`.
    pub fn find_each_text(&self, selector: &str) -> Result<Vec<String>> {
        Ok(self
            .select(selector)?
            .iter()
            .map(|element| element.text().to_string())
            .collect())
    }
}
