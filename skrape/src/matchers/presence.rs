//! Presence matchers for selection results.

use super::assertions::report;
use crate::errors::AssertionFailure;
use crate::selects::{Doc, DocElement};

/// Something that can be checked for matching elements.
pub trait Presence {
    /// Number of matching elements.
    fn presence_count(&self) -> usize;

    /// Short description used in failure messages.
    fn describe(&self) -> String;
}

impl<T> Presence for [T] {
    fn presence_count(&self) -> usize {
        self.len()
    }

    fn describe(&self) -> String {
        format!("collection of {} element(s)", self.len())
    }
}

impl<T> Presence for Vec<T> {
    fn presence_count(&self) -> usize {
        self.len()
    }

    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}

impl Presence for DocElement<'_> {
    fn presence_count(&self) -> usize {
        self.all_elements().len()
    }

    fn describe(&self) -> String {
        format!("element <{}>", self.tag_name())
    }
}

impl Presence for Doc {
    fn presence_count(&self) -> usize {
        self.root().presence_count()
    }

    fn describe(&self) -> String {
        "document".to_string()
    }
}

/// Checks that `subject` has at least one matching element.
pub fn check_to_be_present<P: Presence + ?Sized>(subject: &P) -> Result<(), AssertionFailure> {
    if subject.presence_count() >= 1 {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "expected {} to be present",
            subject.describe()
        )))
    }
}

/// Asserts that `subject` has at least one matching element.
#[track_caller]
pub fn to_be_present<P: Presence + ?Sized>(subject: &P) {
    report(check_to_be_present(subject));
}

/// Asserts that `subject` has no matching element.
#[track_caller]
pub fn to_not_be_present<P: Presence + ?Sized>(subject: &P) {
    if subject.presence_count() > 0 {
        report(Err(AssertionFailure::new(format!(
            "expected {} to not be present, found {}",
            subject.describe(),
            subject.presence_count()
        ))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        Elements {}

        impl Presence for Elements {
            fn presence_count(&self) -> usize;
            fn describe(&self) -> String;
        }
    }

    fn elements_of_size(size: usize) -> MockElements {
        let mut elements = MockElements::new();
        elements.expect_presence_count().return_const(size);
        elements
            .expect_describe()
            .returning(|| "mocked elements".to_string());
        elements
    }

    #[test]
    fn test_present_with_multiple_elements() {
        to_be_present(&elements_of_size(2));
    }

    #[test]
    fn test_present_with_single_element() {
        to_be_present(&elements_of_size(1));
    }

    #[test]
    #[should_panic(expected = "expected mocked elements to be present")]
    fn test_present_fails_without_elements() {
        to_be_present(&elements_of_size(0));
    }

    #[test]
    fn test_not_present_without_elements() {
        to_not_be_present(&elements_of_size(0));
    }

    #[test]
    fn test_present_on_collections() {
        to_be_present(&vec![1, 2]);
        to_be_present(&[1][..]);
        assert!(check_to_be_present(&Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_present_on_element() {
        let doc = Doc::parse("<ul><li>a</li><li>b</li></ul>", false);
        let list = doc.root().select_first("ul").unwrap();

        assert_eq!(list.presence_count(), 3);
        to_be_present(&list);
        to_be_present(&doc);
    }

    #[test]
    fn test_relaxed_default_counts_as_present() {
        let doc = Doc::parse("<p>text</p>", true);
        let missing = doc.root().select_first("table").unwrap();

        to_be_present(&missing);
    }

    #[test]
    #[should_panic(expected = "expected collection of 0 element(s) to be present")]
    fn test_present_fails_on_empty_selection_result() {
        let empty: Vec<DocElement<'_>> = Vec::new();
        to_be_present(&empty);
    }
}
