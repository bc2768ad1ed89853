//! Fluent assertion helpers for tests.
//!
//! Every matcher either returns silently or panics with a descriptive
//! message, failing the current test. The `check_*` variants return the
//! [`AssertionFailure`](crate::errors::AssertionFailure) instead.

mod assertions;
mod presence;

pub use assertions::{
    check_to_be, check_to_be_not, check_to_contain, check_to_contain_element,
    check_to_not_contain, to_be, to_be_empty, to_be_not, to_be_not_empty, to_contain,
    to_contain_element, to_end_with, to_match, to_not_contain, to_start_with,
};
pub use presence::{check_to_be_present, to_be_present, to_not_be_present, Presence};
