//! Sample documents for tests.

use crate::fetch::FetchResult;
use crate::selects::Doc;

/// URL the sample document is served from by [`sample_result`].
pub const SAMPLE_URL: &str = "http://localhost:8080/sample";

/// A small page with headings, links, images and a list.
pub const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>i'm the title</title>
    <meta name="description" content="sample page">
</head>
<body>
    <h1>i'm the headline</h1>
    <p class="intro">Lorem <b>ipsum</b> dolor</p>
    <nav>
        <a href="https://some.url">first link</a>
        <a href="https://some-other.url" class="secondary">second link</a>
    </nav>
    <img src="https://some.url/img.png" alt="some image">
    <img src="https://some.url/logo.svg" alt="logo">
    <ul class="items">
        <li>item one</li>
        <li>item two</li>
        <li>item three</li>
    </ul>
</body>
</html>"#;

/// Parses [`SAMPLE_HTML`].
#[must_use]
pub fn sample_document(relaxed: bool) -> Doc {
    Doc::parse(SAMPLE_HTML, relaxed)
}

/// A successful response carrying [`SAMPLE_HTML`].
#[must_use]
pub fn sample_result() -> FetchResult {
    FetchResult::ok(SAMPLE_URL, SAMPLE_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{to_be, to_contain_element, to_be_present};
    use std::collections::HashMap;

    #[test]
    fn test_sample_document_title_and_headline() {
        let doc = sample_document(false);

        to_be(doc.title_text().as_str(), "i'm the title");
        to_be(doc.root().select_first("h1").unwrap().text(), "i'm the headline");
    }

    #[test]
    fn test_sample_document_links_and_images() {
        let doc = sample_document(false);
        let root = doc.root();

        to_contain_element(&root.each_href(), "https://some-other.url");
        let expected_links: HashMap<String, String> = [
            ("first link".to_string(), "https://some.url".to_string()),
            ("second link".to_string(), "https://some-other.url".to_string()),
        ]
        .into_iter()
        .collect();
        to_be(&root.each_link(), &expected_links);
        to_be(&root.each_image().get("logo").cloned(), &Some("https://some.url/logo.svg".to_string()));
    }

    #[test]
    fn test_sample_document_list() {
        let doc = sample_document(true);
        let items = doc.select("ul.items li").unwrap();

        to_be(&items.len(), &3);
        to_be_present(&items);
        to_be(items[1].text(), "item two");
    }

    #[test]
    fn test_sample_result() {
        let result = sample_result();

        assert!(result.is_success());
        assert!(result.is_html());
        assert_eq!(result.final_url, SAMPLE_URL);
    }
}
