//! Default failure messages
//!
//! Every check has a default template, used when the caller does not pass
//! one. [`Messages`] gathers all of them so a project can swap in its own
//! wording once, instead of passing a template at every call site.
//!
//! Templates use the placeholder syntax of [`template`](crate::template).
//! The arguments each check supplies are:
//!
//! | Check | Arguments |
//! |---|---|
//! | `not_null`, `is_true`, `not_empty` | none |
//! | `not_blank`, `uuid` | `{value}` |
//! | `min` | `{value}`, `{minimum}` |
//! | `pattern` | `{value}`, `{pattern}` |
//! | `not_in` | `{value}`, `{values}` |
//!
//! # Example
//!
//! ```
//! use preconditions::{Assertions, Messages};
//!
//! let messages = Messages::DEFAULT.with_is_true(Messages::IS_TRUE_MUST_BE_TRUE);
//! let assertions = Assertions::new(messages);
//!
//! let err = assertions.is_true(false).unwrap_err();
//! assert_eq!(err.message(), "Value must be true");
//! ```

use std::borrow::Cow;

/// The default template of each check.
///
/// With the `serde` feature this deserializes from any serde format;
/// fields left out keep their default template.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Messages {
    /// Template for `not_null`.
    pub not_null: Cow<'static, str>,
    /// Template for `is_true`.
    pub is_true: Cow<'static, str>,
    /// Template for `not_empty`.
    pub not_empty: Cow<'static, str>,
    /// Template for `not_blank`.
    pub not_blank: Cow<'static, str>,
    /// Template for `uuid`.
    pub uuid: Cow<'static, str>,
    /// Template for `min`.
    pub min: Cow<'static, str>,
    /// Template for `pattern`.
    pub pattern: Cow<'static, str>,
    /// Template for `not_in`.
    pub not_in: Cow<'static, str>,
}

impl Messages {
    /// Alternative `is_true` wording, for projects that prefer stating the
    /// requirement over the violation.
    pub const IS_TRUE_MUST_BE_TRUE: &'static str = "Value must be true";

    /// The built-in templates.
    pub const DEFAULT: Messages = Messages {
        not_null: Cow::Borrowed("Value cannot be null"),
        is_true: Cow::Borrowed("Value cannot be false"),
        not_empty: Cow::Borrowed("Collection cannot be empty"),
        not_blank: Cow::Borrowed("Value cannot be blank or null. '{value}' given."),
        uuid: Cow::Borrowed("'{value}' is not a valid UUID"),
        min: Cow::Borrowed("Value must be greater than or equal to {minimum}. {value} given"),
        pattern: Cow::Borrowed("'{value}' doesn't match pattern '{pattern}'"),
        not_in: Cow::Borrowed("Value '{value}' was not expected to be one of the values in: {values}"),
    };

    /// Replace the `not_null` template.
    pub fn with_not_null(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.not_null = template.into();
        self
    }

    /// Replace the `is_true` template.
    pub fn with_is_true(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.is_true = template.into();
        self
    }

    /// Replace the `not_empty` template.
    pub fn with_not_empty(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.not_empty = template.into();
        self
    }

    /// Replace the `not_blank` template.
    pub fn with_not_blank(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.not_blank = template.into();
        self
    }

    /// Replace the `uuid` template.
    pub fn with_uuid(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.uuid = template.into();
        self
    }

    /// Replace the `min` template.
    pub fn with_min(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.min = template.into();
        self
    }

    /// Replace the `pattern` template.
    pub fn with_pattern(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.pattern = template.into();
        self
    }

    /// Replace the `not_in` template.
    pub fn with_not_in(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.not_in = template.into();
        self
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::DEFAULT
    }
}
