//! Presence and truth checks

use super::{report, Assertions};
use crate::error::Result;

impl Assertions {
    /// Fail when `value` is `None`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let assertions = Assertions::DEFAULT;
    /// assert!(assertions.not_null(&Some(true)).is_ok());
    ///
    /// let username: Option<String> = None;
    /// let err = assertions.not_null(&username).unwrap_err();
    /// assert_eq!(err.message(), "Value cannot be null");
    /// ```
    pub fn not_null<T>(&self, value: &Option<T>) -> Result {
        self.not_null_with(value, &self.messages.not_null)
    }

    /// Like [`not_null`](Self::not_null) with a custom message.
    pub fn not_null_with<T>(&self, value: &Option<T>, message: &str) -> Result {
        if value.is_some() {
            return Ok(());
        }
        Err(report("not_null", message, &[]))
    }

    /// Fail when `condition` is `false`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let assertions = Assertions::DEFAULT;
    /// assert!(assertions.is_true(1 < 2).is_ok());
    /// assert_eq!(
    ///     assertions.is_true(2 > 3).unwrap_err().message(),
    ///     "Value cannot be false"
    /// );
    /// ```
    pub fn is_true(&self, condition: bool) -> Result {
        self.is_true_with(condition, &self.messages.is_true)
    }

    /// Like [`is_true`](Self::is_true) with a custom message.
    pub fn is_true_with(&self, condition: bool, message: &str) -> Result {
        if condition {
            return Ok(());
        }
        Err(report("is_true", message, &[]))
    }
}

/// Fail when `value` is `None`.
pub fn not_null<T>(value: &Option<T>) -> Result {
    Assertions::DEFAULT.not_null(value)
}

/// Fail when `value` is `None`, reporting `message`.
pub fn not_null_with<T>(value: &Option<T>, message: &str) -> Result {
    Assertions::DEFAULT.not_null_with(value, message)
}

/// Fail when `condition` is `false`.
pub fn is_true(condition: bool) -> Result {
    Assertions::DEFAULT.is_true(condition)
}

/// Fail when `condition` is `false`, reporting `message`.
pub fn is_true_with(condition: bool, message: &str) -> Result {
    Assertions::DEFAULT.is_true_with(condition, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Messages;

    #[test]
    fn test_not_null_allows_present_values() {
        assert!(not_null(&Some(true)).is_ok());
        assert!(not_null(&Some("")).is_ok());
    }

    #[test]
    fn test_not_null_rejects_none() {
        let value: Option<i32> = None;
        let err = not_null(&value).unwrap_err();
        assert_eq!(err.message(), "Value cannot be null");
    }

    #[test]
    fn test_not_null_custom_message() {
        let username: Option<String> = None;
        let err = not_null_with(&username, "Username cannot be null").unwrap_err();
        assert_eq!(err.message(), "Username cannot be null");
    }

    #[test]
    fn test_is_true_allows_true() {
        assert!(is_true(true).is_ok());
        assert!(is_true_with(true, "unused").is_ok());
    }

    #[test]
    fn test_is_true_rejects_false() {
        let err = is_true(false).unwrap_err();
        assert_eq!(err.message(), "Value cannot be false");
    }

    #[test]
    fn test_is_true_custom_message() {
        let err = is_true_with(2 > 3, "Value must be greater than 3").unwrap_err();
        assert_eq!(err.message(), "Value must be greater than 3");
    }

    #[test]
    fn test_is_true_alternative_default() {
        let assertions =
            Assertions::new(Messages::default().with_is_true(Messages::IS_TRUE_MUST_BE_TRUE));
        let err = assertions.is_true(false).unwrap_err();
        assert_eq!(err.message(), "Value must be true");
    }

    #[test]
    fn test_templates_without_arguments_render_placeholders_verbatim() {
        let err = is_true_with(false, "{value} is false").unwrap_err();
        assert_eq!(err.message(), "{value} is false");
    }
}
