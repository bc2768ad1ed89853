//! Link, image and attribute extraction over an element's subtree.

use std::collections::HashMap;

use super::element::DocElement;

impl DocElement<'_> {
    /// Non-empty values of `key` across [`all_elements`](Self::all_elements).
    #[must_use]
    pub fn each_attribute(&self, key: &str) -> Vec<String> {
        self.all_elements()
            .iter()
            .map(|element| element.attribute(key))
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Every non-empty `href` in the subtree.
    #[must_use]
    pub fn each_href(&self) -> Vec<String> {
        self.each_attribute("href")
            .into_iter()
            .filter(|href| !href.is_empty())
            .collect()
    }

    /// Every non-empty `src` in the subtree.
    #[must_use]
    pub fn each_src(&self) -> Vec<String> {
        self.each_attribute("src")
            .into_iter()
            .filter(|src| !src.is_empty())
            .collect()
    }

    /// Link text to `href` for every element carrying an `href` attribute.
    ///
    /// Elements with the same text overwrite earlier ones.
    #[must_use]
    pub fn each_link(&self) -> HashMap<String, String> {
        self.all_elements()
            .iter()
            .filter(|element| element.has_attribute("href"))
            .map(|element| (element.text().to_string(), element.attribute("href")))
            .collect()
    }

    /// `alt` to `src` for every `<img>` carrying a `src` attribute.
    #[must_use]
    pub fn each_image(&self) -> HashMap<String, String> {
        self.all_elements()
            .iter()
            .filter(|element| element.tag_name() == "img")
            .filter(|element| element.has_attribute("src"))
            .map(|element| (element.attribute("alt"), element.attribute("src")))
            .collect()
    }
}
