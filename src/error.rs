//! The error returned by every failed check
//!
//! All checks share a single failure kind: an illegal argument carrying a
//! human readable message. The message is the rendered template, so its
//! `Display` output is exactly what the caller configured.
//!
//! # Example
//!
//! ```
//! use preconditions::{min, InvalidArgument};
//!
//! let err: InvalidArgument = min(0, 1).unwrap_err();
//! assert_eq!(err.message(), "Value must be greater than or equal to 1. 0 given");
//! assert_eq!(err.to_string(), err.message());
//! ```

use thiserror::Error;

/// A precondition on a call argument did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    /// Create an error carrying an already rendered message.
    ///
    /// Useful for custom checks that should fail the same way the built-in
    /// ones do.
    ///
    /// ```
    /// use preconditions::InvalidArgument;
    ///
    /// let err = InvalidArgument::new("Port must be even");
    /// assert_eq!(err.to_string(), "Port must be even");
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<regex::Error> for InvalidArgument {
    fn from(err: regex::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Shorthand for the result of a check.
pub type Result<T = (), E = InvalidArgument> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let err = InvalidArgument::new("Username cannot be null");
        assert_eq!(err.to_string(), "Username cannot be null");
        assert_eq!(err.message(), "Username cannot be null");
    }

    #[test]
    fn test_into_message() {
        let err = InvalidArgument::new(String::from("owned"));
        assert_eq!(err.into_message(), "owned");
    }

    #[test]
    fn test_error_trait() {
        use std::error::Error;

        let err = InvalidArgument::new("boom");
        let dyn_err: &dyn Error = &err;
        assert!(dyn_err.source().is_none());
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let expected = regex_err.to_string();

        let err = InvalidArgument::from(regex_err);
        assert_eq!(err.message(), expected);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InvalidArgument>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_shape() {
        let err = InvalidArgument::new("Value cannot be null");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"Value cannot be null"}"#);
    }
}
