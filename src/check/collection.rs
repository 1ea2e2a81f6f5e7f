//! Collection checks
//!
//! Collections are taken as `IntoIterator`, so `&Vec<T>`, slices, sets and
//! maps all work without conversion.

use std::fmt::Display;

use super::{report, Assertions};
use crate::error::Result;
use crate::template::{join, Arg};

impl Assertions {
    /// Fail when `collection` has no elements.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let cart: Vec<&str> = Vec::new();
    /// let err = Assertions::DEFAULT.not_empty(&cart).unwrap_err();
    /// assert_eq!(err.message(), "Collection cannot be empty");
    /// ```
    pub fn not_empty<I: IntoIterator>(&self, collection: I) -> Result {
        self.not_empty_with(collection, &self.messages.not_empty)
    }

    /// Like [`not_empty`](Self::not_empty) with a custom message.
    pub fn not_empty_with<I: IntoIterator>(&self, collection: I, message: &str) -> Result {
        if collection.into_iter().next().is_some() {
            return Ok(());
        }
        Err(report("not_empty", message, &[]))
    }

    /// Fail when any element of `values` equals `value`.
    ///
    /// `{values}` renders every element, joined with `", "`.
    /// Arguments: `{value}`, `{values}`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let taken = ["admin", "root"];
    /// let assertions = Assertions::DEFAULT;
    ///
    /// assert!(assertions.not_in(&"jane", &taken).is_ok());
    /// assert_eq!(
    ///     assertions.not_in(&"root", &taken).unwrap_err().message(),
    ///     "Value 'root' was not expected to be one of the values in: admin, root"
    /// );
    /// ```
    pub fn not_in<'a, T, I>(&self, value: &T, values: I) -> Result
    where
        T: PartialEq + Display + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.not_in_with(value, values, &self.messages.not_in)
    }

    /// Like [`not_in`](Self::not_in) with a custom message.
    pub fn not_in_with<'a, T, I>(&self, value: &T, values: I, message: &str) -> Result
    where
        T: PartialEq + Display + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let values: Vec<&T> = values.into_iter().collect();
        if !values.iter().any(|candidate| *candidate == value) {
            return Ok(());
        }
        Err(report(
            "not_in",
            message,
            &[Arg::new("value", value), Arg::new("values", join(&values))],
        ))
    }
}

/// Fail when `collection` has no elements.
pub fn not_empty<I: IntoIterator>(collection: I) -> Result {
    Assertions::DEFAULT.not_empty(collection)
}

/// Fail when `collection` has no elements, reporting `message`.
pub fn not_empty_with<I: IntoIterator>(collection: I, message: &str) -> Result {
    Assertions::DEFAULT.not_empty_with(collection, message)
}

/// Fail when any element of `values` equals `value`.
pub fn not_in<'a, T, I>(value: &T, values: I) -> Result
where
    T: PartialEq + Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Assertions::DEFAULT.not_in(value, values)
}

/// Fail when any element of `values` equals `value`, reporting `message`.
pub fn not_in_with<'a, T, I>(value: &T, values: I, message: &str) -> Result
where
    T: PartialEq + Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Assertions::DEFAULT.not_in_with(value, values, message)
}
