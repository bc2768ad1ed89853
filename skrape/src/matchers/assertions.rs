//! Value, string and collection matchers.

use regex::Regex;
use std::fmt::Debug;

use crate::errors::AssertionFailure;

/// Panics with the failure message, aborting the current test.
#[track_caller]
pub(crate) fn report(outcome: Result<(), AssertionFailure>) {
    if let Err(failure) = outcome {
        panic!("{failure}");
    }
}

/// Checks that `actual` equals `expected`.
pub fn check_to_be<A, E>(actual: &A, expected: &E) -> Result<(), AssertionFailure>
where
    A: PartialEq<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::expected(expected, actual))
    }
}

/// Checks that `actual` differs from `expected`.
pub fn check_to_be_not<A, E>(actual: &A, expected: &E) -> Result<(), AssertionFailure>
where
    A: PartialEq<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    if actual == expected {
        Err(AssertionFailure::new(format!(
            "expected: not equal but was: <{actual:?}>"
        )))
    } else {
        Ok(())
    }
}

/// Checks that `actual` contains `substring`.
pub fn check_to_contain(actual: &str, substring: &str) -> Result<(), AssertionFailure> {
    if actual.contains(substring) {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "expected '{actual}' to contain '{substring}'"
        )))
    }
}

/// Checks that `actual` does not contain `substring`.
pub fn check_to_not_contain(actual: &str, substring: &str) -> Result<(), AssertionFailure> {
    if actual.contains(substring) {
        Err(AssertionFailure::new(format!(
            "expected '{actual}' to not contain '{substring}'"
        )))
    } else {
        Ok(())
    }
}

/// Checks that `collection` holds an element equal to `element`.
pub fn check_to_contain_element<T, U>(collection: &[T], element: &U) -> Result<(), AssertionFailure>
where
    T: PartialEq<U> + Debug,
    U: Debug + ?Sized,
{
    if collection.iter().any(|item| item == element) {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "expected {collection:?} to contain <{element:?}>"
        )))
    }
}

/// Asserts that `actual` equals `expected`. `None` is the absence value.
///
/// ```
/// use skrape::matchers::to_be;
///
/// to_be(&200, &200);
/// to_be(&None::<&str>, &None);
/// ```
#[track_caller]
pub fn to_be<A, E>(actual: &A, expected: &E)
where
    A: PartialEq<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    report(check_to_be(actual, expected));
}

/// Asserts that `actual` differs from `expected`.
#[track_caller]
pub fn to_be_not<A, E>(actual: &A, expected: &E)
where
    A: PartialEq<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    report(check_to_be_not(actual, expected));
}

/// Asserts that `actual` contains `substring`.
#[track_caller]
pub fn to_contain(actual: &str, substring: &str) {
    report(check_to_contain(actual, substring));
}

/// Asserts that `actual` does not contain `substring`.
#[track_caller]
pub fn to_not_contain(actual: &str, substring: &str) {
    report(check_to_not_contain(actual, substring));
}

/// Asserts that `collection` holds an element equal to `element`.
#[track_caller]
pub fn to_contain_element<T, U>(collection: &[T], element: &U)
where
    T: PartialEq<U> + Debug,
    U: Debug + ?Sized,
{
    report(check_to_contain_element(collection, element));
}

/// Asserts that `actual` starts with `prefix`.
#[track_caller]
pub fn to_start_with(actual: &str, prefix: &str) {
    if !actual.starts_with(prefix) {
        report(Err(AssertionFailure::new(format!(
            "expected '{actual}' to start with '{prefix}'"
        ))));
    }
}

/// Asserts that `actual` ends with `suffix`.
#[track_caller]
pub fn to_end_with(actual: &str, suffix: &str) {
    if !actual.ends_with(suffix) {
        report(Err(AssertionFailure::new(format!(
            "expected '{actual}' to end with '{suffix}'"
        ))));
    }
}

/// Asserts that `actual` matches the regular expression `pattern`.
///
/// An invalid pattern fails the assertion.
#[track_caller]
pub fn to_match(actual: &str, pattern: &str) {
    let outcome = match Regex::new(pattern) {
        Ok(re) if re.is_match(actual) => Ok(()),
        Ok(_) => Err(AssertionFailure::new(format!(
            "expected '{actual}' to match /{pattern}/"
        ))),
        Err(e) => Err(AssertionFailure::new(format!(
            "invalid pattern /{pattern}/: {e}"
        ))),
    };
    report(outcome);
}

/// Asserts that `actual` is empty.
#[track_caller]
pub fn to_be_empty(actual: &str) {
    if !actual.is_empty() {
        report(Err(AssertionFailure::new(format!(
            "expected empty string but was: '{actual}'"
        ))));
    }
}

/// Asserts that `actual` is not empty.
#[track_caller]
pub fn to_be_not_empty(actual: &str) {
    if actual.is_empty() {
        report(Err(AssertionFailure::new("expected a non-empty string")));
    }
}
