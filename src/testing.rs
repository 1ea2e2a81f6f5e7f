//! Testing utilities for code that uses these checks
//!
//! Assertion macros for check results, plus (with the `proptest` feature)
//! strategies generating the inputs the string checks care about.
//!
//! # Examples
//!
//! ```rust
//! use preconditions::{assert_invalid, assert_invalid_message, assert_valid};
//! use preconditions::{min, not_blank};
//!
//! assert_valid!(min(2, 1));
//! assert_invalid!(not_blank("   "));
//! assert_invalid_message!(min(0, 1), "Value must be greater than or equal to 1. 0 given");
//! ```

/// Assert that a check passed.
///
/// Panics with the failure message if the check returned `Err`.
///
/// ```rust
/// use preconditions::{assert_valid, is_true};
///
/// assert_valid!(is_true(1 + 1 == 2));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($check:expr) => {
        match $check {
            ::std::result::Result::Ok(_) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected valid argument, got InvalidArgument: {}", e);
            }
        }
    };
}

/// Assert that a check failed.
///
/// ```rust
/// use preconditions::{assert_invalid, is_true};
///
/// assert_invalid!(is_true(false));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($check:expr) => {
        match $check {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(v) => {
                panic!("Expected InvalidArgument, got Ok: {:?}", v);
            }
        }
    };
}

/// Assert that a check failed with exactly `expected` as its message.
///
/// ```rust
/// use preconditions::{assert_invalid_message, uuid};
///
/// assert_invalid_message!(uuid("nope"), "'nope' is not a valid UUID");
/// ```
#[macro_export]
macro_rules! assert_invalid_message {
    ($check:expr, $expected:expr) => {
        match $check {
            ::std::result::Result::Err(e) => {
                assert_eq!($crate::InvalidArgument::message(&e), $expected);
            }
            ::std::result::Result::Ok(v) => {
                panic!(
                    "Expected InvalidArgument with message {:?}, got Ok: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use self::strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    /// Strings that `not_blank` rejects: empty or ASCII whitespace only.
    pub fn blank_strings() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,8}"
    }

    /// Strings that `not_blank` accepts: at least one visible character,
    /// possibly padded.
    pub fn non_blank_strings() -> impl Strategy<Value = String> {
        "[ \t]{0,3}[a-zA-Z0-9_.@-]{1,16}[ \t]{0,3}"
    }

    /// Hyphenated UUIDs that `uuid` accepts.
    pub fn uuid_strings() -> impl Strategy<Value = String> {
        any::<u128>().prop_map(|bits| ::uuid::Uuid::from_u128(bits).to_string())
    }
}
