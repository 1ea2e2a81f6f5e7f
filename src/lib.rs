//! # Preconditions
//!
//! Argument checks that fail fast with a readable message.
//!
//! Each check evaluates one predicate on a call argument and either returns
//! `Ok(())` or an [`InvalidArgument`] whose message is rendered from a
//! template. Every check has a default template and a `_with` variant that
//! takes your own, filled in with the same arguments.
//!
//! | Check | Fails when |
//! |---|---|
//! | [`not_null`] | the `Option` is `None` |
//! | [`is_true`] | the condition is `false` |
//! | [`not_empty`] | the collection has no elements |
//! | [`not_blank`] | the string is absent, empty or whitespace |
//! | [`uuid`] | the string is not a UUID |
//! | [`min`] | the value is below the minimum |
//! | [`pattern`] | the regex finds no match |
//! | [`not_in`] | the value is one of the given values |
//!
//! ## Quick Example
//!
//! ```rust
//! use preconditions::prelude::*;
//!
//! fn open_account(owner: &str, deposit: f64, currency: &str) -> Result<(), InvalidArgument> {
//!     not_blank(owner)?;
//!     min_with(deposit, 10.0, "A deposit of at least {minimum} is required, got {value}")?;
//!     not_in_with(&currency, &["XXX", "XTS"], "'{value}' is reserved ({values})")?;
//!     Ok(())
//! }
//!
//! assert!(open_account("Jane Doe", 50.0, "EUR").is_ok());
//!
//! let err = open_account("Jane Doe", 2.5, "EUR").unwrap_err();
//! assert_eq!(err.message(), "A deposit of at least 10 is required, got 2.5");
//!
//! let err = open_account("", 50.0, "EUR").unwrap_err();
//! assert_eq!(err.message(), "Value cannot be blank or null. '' given.");
//! ```
//!
//! Message placeholders are described in [`template`]; project-wide default
//! messages are configured through [`Messages`] and [`Assertions`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod error;
pub mod messages;
pub mod template;
pub mod testing;

// Re-exports
pub use check::{
    is_true, is_true_with, min, min_with, not_blank, not_blank_with, not_empty, not_empty_with,
    not_in, not_in_with, not_null, not_null_with, pattern, pattern_with, uuid, uuid_with,
    Assertions,
};
pub use error::InvalidArgument;
pub use messages::Messages;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::{
        is_true, is_true_with, min, min_with, not_blank, not_blank_with, not_empty,
        not_empty_with, not_in, not_in_with, not_null, not_null_with, pattern, pattern_with, uuid,
        uuid_with, Assertions,
    };
    pub use crate::error::InvalidArgument;
    pub use crate::messages::Messages;
}
