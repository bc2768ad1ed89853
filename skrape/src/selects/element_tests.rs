//! Tests for DocElement views and selection.

#[cfg(test)]
mod tests {
    use crate::errors::SkrapeError;
    use crate::selects::{DefaultElement, DefaultNodeFactory, Doc, Placeholder};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const PAGE: &str = r#"
        <html>
        <head><title>Page</title></head>
        <body>
            <div class="outer">
                <p>Hello <b>there</b>   now! </p>
                <div class="outer"><span>inner</span></div>
            </div>
            <ul><li>a</li><li>b</li></ul>
        </body>
        </html>
    "#;

    #[derive(Debug, Default)]
    struct CountingFactory {
        calls: AtomicUsize,
    }

    impl DefaultNodeFactory for CountingFactory {
        fn create(&self, selector: &str) -> Placeholder {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Placeholder::new("section", selector)
        }
    }

    #[test]
    fn test_text_is_normalized() {
        let doc = Doc::parse(PAGE, false);
        let p = doc.root().select_first("p").unwrap();

        assert_eq!(p.text(), "Hello there now!");
    }

    #[test]
    fn test_text_of_adjacent_inline_elements() {
        let doc = Doc::parse("<p><b>sch</b><i>nitzel</i></p>", false);
        let p = doc.root().select_first("p").unwrap();

        assert_eq!(p.text(), "schnitzel");
    }

    #[test]
    fn test_text_empty_when_no_text() {
        let doc = Doc::parse("<div><br></div>", false);
        let div = doc.root().select_first("div").unwrap();

        assert_eq!(div.text(), "");
    }

    #[test]
    fn test_inner_and_outer_html() {
        let doc = Doc::parse("<div><p></p></div>", false);
        let div = doc.root().select_first("div").unwrap();

        assert_eq!(div.html(), "<p></p>");
        assert_eq!(div.outer_html(), "<div><p></p></div>");
        assert_eq!(div.to_string(), "<div><p></p></div>");
    }

    #[test]
    fn test_views_are_memoized() {
        let doc = Doc::parse(PAGE, false);
        let root = doc.root();

        assert!(std::ptr::eq(root.text(), root.text()));
        assert!(std::ptr::eq(root.html(), root.html()));
        assert!(std::ptr::eq(root.outer_html(), root.outer_html()));
        assert!(std::ptr::eq(root.all_elements(), root.all_elements()));
    }

    #[test]
    fn test_all_elements_starts_with_self_in_document_order() {
        let doc = Doc::parse("<ul><li>a</li><li>b</li></ul>", false);
        let ul = doc.root().select_first("ul").unwrap();
        let tags: Vec<&str> = ul.all_elements().iter().map(|e| e.tag_name()).collect();

        assert_eq!(tags, vec!["ul", "li", "li"]);
        assert_eq!(ul.all_elements()[0], ul);
    }

    #[test]
    fn test_empty_selector_returns_all_elements() {
        let doc = Doc::parse(PAGE, false);
        let root = doc.root();

        assert_eq!(root.select("").unwrap(), root.all_elements().to_vec());
    }

    #[test]
    fn test_select_excludes_self() {
        let doc = Doc::parse(PAGE, false);
        let outer = doc.root().select_first("div.outer").unwrap();
        let nested = outer.select(".outer").unwrap();

        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].text(), "inner");
    }

    const NESTED: &str = r#"<div id="a"><ul><li>x</li><li>y</li></ul></div>"#;

    #[test]
    fn test_select_matches_direct_children() {
        for relaxed in [false, true] {
            let doc = Doc::parse(NESTED, relaxed);
            let root = doc.root();

            let body = root.select("body").unwrap();
            assert_eq!(body.len(), 1);
            assert!(!body[0].is_placeholder());
            assert_eq!(body[0].tag_name(), "body");

            let ul = root.select_first("ul").unwrap();
            let items = ul.select("li").unwrap();
            let texts: Vec<&str> = items.iter().map(|e| e.text()).collect();
            assert_eq!(texts, vec!["x", "y"]);
        }
    }

    #[test]
    fn test_select_matches_deep_descendants() {
        for relaxed in [false, true] {
            let doc = Doc::parse(NESTED, relaxed);
            let div = doc.root().select_first("div#a").unwrap();

            let items = div.select("li").unwrap();
            assert_eq!(items.len(), 2);
            assert!(items.iter().all(|e| !e.is_placeholder()));
        }
    }

    #[test]
    fn test_select_never_matches_self_strict() {
        let doc = Doc::parse(NESTED, false);
        let ul = doc.root().select_first("ul").unwrap();

        let err = ul.select("ul").unwrap_err();
        assert!(matches!(err, SkrapeError::ElementNotFound(ref e) if e.selector == "ul"));
    }

    #[test]
    fn test_select_never_matches_self_relaxed() {
        let doc = Doc::parse(NESTED, true);
        let ul = doc.root().select_first("ul").unwrap();

        let selected = ul.select("ul").unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].is_placeholder());
        assert_eq!(selected[0].tag_name(), "div");
    }

    #[test]
    fn test_universal_selector_covers_all_descendants() {
        let doc = Doc::parse(NESTED, false);
        let root = doc.root();

        let everything = root.select("*").unwrap();
        assert_eq!(everything.len(), root.all_elements().len() - 1);
        assert_eq!(everything[..], root.all_elements()[1..]);
    }

    #[test]
    fn test_combinators_may_reference_ancestors() {
        let doc = Doc::parse(NESTED, false);
        let ul = doc.root().select_first("ul").unwrap();

        assert_eq!(ul.select("ul > li").unwrap().len(), 2);
        assert_eq!(ul.select("div li").unwrap().len(), 2);
    }

    #[test]
    fn test_select_returns_matches_in_document_order() {
        let doc = Doc::parse(PAGE, false);
        let items = doc.select("li").unwrap();
        let texts: Vec<&str> = items.iter().map(|e| e.text()).collect();

        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_strict_selection_fails_with_selector() {
        let doc = Doc::parse(PAGE, false);
        let err = doc.select("table.missing").unwrap_err();

        match err {
            SkrapeError::ElementNotFound(e) => assert_eq!(e.selector, "table.missing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_relaxed_selection_yields_default() {
        let doc = Doc::parse(PAGE, true);
        let selected = doc.select("table.missing").unwrap();

        assert_eq!(selected.len(), 1);
        let fallback = &selected[0];
        assert!(fallback.is_placeholder());
        assert!(fallback.relaxed());
        assert_eq!(fallback.tag_name(), "html");
        assert_eq!(fallback.text(), "");
        assert_eq!(fallback.html(), "");
        assert_eq!(fallback.attribute("href"), "");
        assert_eq!(fallback.all_elements().len(), 1);
    }

    #[test]
    fn test_relaxed_default_below_root_is_element_context() {
        let doc = Doc::parse(PAGE, true);
        let list = doc.root().select_first("ul").unwrap();
        let fallback = list.select_first("table").unwrap();

        assert_eq!(fallback.tag_name(), "div");
        assert_eq!(fallback.outer_html(), "<div></div>");
        assert!(fallback.select_first("tr").unwrap().is_placeholder());
    }

    #[test]
    fn test_relaxed_flag_is_inherited() {
        let doc = Doc::parse(PAGE, true);
        let list = doc.root().select_first("ul").unwrap();

        assert!(list.relaxed());
        assert!(list.all_elements().iter().all(|e| e.relaxed()));
    }

    #[test]
    fn test_invalid_selector_fails_in_both_modes() {
        for relaxed in [true, false] {
            let doc = Doc::parse(PAGE, relaxed);
            let err = doc.select("div[").unwrap_err();
            assert!(matches!(err, SkrapeError::InvalidSelector(ref e) if e.selector == "div["));
        }
    }

    #[test]
    fn test_custom_factory_used_when_relaxed() {
        let factory = Arc::new(CountingFactory::default());
        let doc = Doc::parse(PAGE, true);
        let root = doc
            .root()
            .with_defaults(DefaultElement::Custom(factory.clone()));

        let fallback = root.select_first("video").unwrap();
        assert_eq!(fallback.tag_name(), "section");
        assert_eq!(factory.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_factory_never_called_when_strict() {
        let factory = Arc::new(CountingFactory::default());
        let doc = Doc::parse(PAGE, false);
        let root = doc
            .root()
            .with_defaults(DefaultElement::Custom(factory.clone()));

        assert!(root.select_first("video").is_err());
        assert!(root.make_default("video").is_err());
        assert_eq!(factory.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_attributes() {
        let doc = Doc::parse(r#"<a href="/x" data-empty="">x</a>"#, false);
        let link = doc.root().select_first("a").unwrap();

        assert_eq!(link.attribute("href"), "/x");
        assert_eq!(link.attribute("title"), "");
        assert!(link.has_attribute("data-empty"));
        assert!(!link.has_attribute("title"));
        assert_eq!(link.attributes().len(), 2);
    }
}
