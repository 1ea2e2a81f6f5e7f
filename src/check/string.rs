//! String checks
//!
//! `not_blank` and `uuid` accept either `&str` or `Option<&str>`; an absent
//! string always fails and shows up as `null` in the message.

use regex::Regex;
use ::uuid::Uuid;

use super::{report, Assertions, NULL};
use crate::error::Result;
use crate::template::Arg;

impl Assertions {
    /// Fail when `value` is absent, empty, or only whitespace.
    ///
    /// Arguments: `{value}`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let assertions = Assertions::DEFAULT;
    /// assert!(assertions.not_blank("Not blank value").is_ok());
    /// assert_eq!(
    ///     assertions.not_blank(" ").unwrap_err().message(),
    ///     "Value cannot be blank or null. ' ' given."
    /// );
    /// ```
    pub fn not_blank<'a>(&self, value: impl Into<Option<&'a str>>) -> Result {
        self.not_blank_with(value, &self.messages.not_blank)
    }

    /// Like [`not_blank`](Self::not_blank) with a custom message.
    pub fn not_blank_with<'a>(&self, value: impl Into<Option<&'a str>>, message: &str) -> Result {
        let value = value.into();
        match value {
            Some(text) if !is_blank(text) => Ok(()),
            _ => Err(report(
                "not_blank",
                message,
                &[Arg::new("value", value.unwrap_or(NULL))],
            )),
        }
    }

    /// Fail unless `value` is a UUID in the hyphenated 8-4-4-4-12 form.
    ///
    /// Hex digits may be either case. Simple, braced and URN forms fail.
    /// Arguments: `{value}`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let assertions = Assertions::DEFAULT;
    /// assert!(assertions.uuid("2ce88a3b-d393-4013-8ebc-7f8c9e0a6b01").is_ok());
    /// assert_eq!(
    ///     assertions.uuid("not an UUID").unwrap_err().message(),
    ///     "'not an UUID' is not a valid UUID"
    /// );
    /// ```
    pub fn uuid<'a>(&self, value: impl Into<Option<&'a str>>) -> Result {
        self.uuid_with(value, &self.messages.uuid)
    }

    /// Like [`uuid`](Self::uuid) with a custom message.
    pub fn uuid_with<'a>(&self, value: impl Into<Option<&'a str>>, message: &str) -> Result {
        let value = value.into();
        let hyphenated =
            |text: &str| text.len() == HYPHENATED_LEN && Uuid::try_parse(text).is_ok();
        if value.is_some_and(hyphenated) {
            return Ok(());
        }
        Err(report(
            "uuid",
            message,
            &[Arg::new("value", value.unwrap_or(NULL))],
        ))
    }

    /// Fail unless `pattern` matches somewhere in `value`.
    ///
    /// The regex is searched for, not anchored; use `^...$` to require a
    /// full match. A pattern that does not compile is itself an invalid
    /// argument, reported with the compiler's diagnostic.
    /// Arguments: `{value}`, `{pattern}`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let assertions = Assertions::DEFAULT;
    /// assert!(assertions.pattern("abc123", r"(\d+)").is_ok());
    /// assert_eq!(
    ///     assertions.pattern("abc", r"(\d+)").unwrap_err().message(),
    ///     r"'abc' doesn't match pattern '(\d+)'"
    /// );
    /// ```
    pub fn pattern(&self, value: &str, pattern: &str) -> Result {
        self.pattern_with(value, pattern, &self.messages.pattern)
    }

    /// Like [`pattern`](Self::pattern) with a custom message.
    pub fn pattern_with(&self, value: &str, pattern: &str, message: &str) -> Result {
        let regex = Regex::new(pattern)?;
        if regex.is_match(value) {
            return Ok(());
        }
        Err(report(
            "pattern",
            message,
            &[Arg::new("value", value), Arg::new("pattern", pattern)],
        ))
    }
}

/// Length of `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
const HYPHENATED_LEN: usize = 36;

/// Control characters and spaces count as blank along with Unicode whitespace.
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c <= ' ' || c.is_whitespace()).is_empty()
}

/// Fail when `value` is absent, empty, or only whitespace.
pub fn not_blank<'a>(value: impl Into<Option<&'a str>>) -> Result {
    Assertions::DEFAULT.not_blank(value)
}

/// Fail when `value` is absent, empty, or only whitespace, reporting `message`.
pub fn not_blank_with<'a>(value: impl Into<Option<&'a str>>, message: &str) -> Result {
    Assertions::DEFAULT.not_blank_with(value, message)
}

/// Fail unless `value` parses as a UUID.
pub fn uuid<'a>(value: impl Into<Option<&'a str>>) -> Result {
    Assertions::DEFAULT.uuid(value)
}

/// Fail unless `value` parses as a UUID, reporting `message`.
pub fn uuid_with<'a>(value: impl Into<Option<&'a str>>, message: &str) -> Result {
    Assertions::DEFAULT.uuid_with(value, message)
}

/// Fail unless `pattern` matches somewhere in `value`.
pub fn pattern(value: &str, pattern: &str) -> Result {
    Assertions::DEFAULT.pattern(value, pattern)
}

/// Fail unless `pattern` matches somewhere in `value`, reporting `message`.
pub fn pattern_with(value: &str, pattern: &str, message: &str) -> Result {
    Assertions::DEFAULT.pattern_with(value, pattern, message)
}
