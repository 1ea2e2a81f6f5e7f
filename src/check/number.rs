//! Ordering checks

use std::cmp::Ordering;
use std::fmt::Display;

use super::{report, Assertions};
use crate::error::Result;
use crate::template::Arg;

impl Assertions {
    /// Fail when `value` is less than `minimum`.
    ///
    /// Works for any pair of types with a `PartialOrd` relation, not only
    /// numbers. Values that cannot be compared (a `NaN`) fail.
    /// Arguments: `{value}`, `{minimum}`.
    ///
    /// ```rust
    /// use preconditions::Assertions;
    ///
    /// let assertions = Assertions::DEFAULT;
    /// assert!(assertions.min(1, 1).is_ok());
    /// assert!(assertions.min(2, 1).is_ok());
    /// assert_eq!(
    ///     assertions.min(0, 1).unwrap_err().message(),
    ///     "Value must be greater than or equal to 1. 0 given"
    /// );
    /// ```
    pub fn min<T, U>(&self, value: T, minimum: U) -> Result
    where
        T: PartialOrd<U> + Display,
        U: Display,
    {
        self.min_with(value, minimum, &self.messages.min)
    }

    /// Like [`min`](Self::min) with a custom message.
    pub fn min_with<T, U>(&self, value: T, minimum: U, message: &str) -> Result
    where
        T: PartialOrd<U> + Display,
        U: Display,
    {
        if let Some(Ordering::Greater | Ordering::Equal) = value.partial_cmp(&minimum) {
            return Ok(());
        }
        Err(report(
            "min",
            message,
            &[Arg::new("value", value), Arg::new("minimum", minimum)],
        ))
    }
}

/// Fail when `value` is less than `minimum`.
pub fn min<T, U>(value: T, minimum: U) -> Result
where
    T: PartialOrd<U> + Display,
    U: Display,
{
    Assertions::DEFAULT.min(value, minimum)
}

/// Fail when `value` is less than `minimum`, reporting `message`.
pub fn min_with<T, U>(value: T, minimum: U, message: &str) -> Result
where
    T: PartialOrd<U> + Display,
    U: Display,
{
    Assertions::DEFAULT.min_with(value, minimum, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_rejects_less_than_minimum() {
        assert!(min(0.2, 1.0).is_err());
        assert!(min(-1_i64, 0_i64).is_err());
    }

    #[test]
    fn test_min_accepts_equal_or_greater() {
        assert!(min(1_i64, 1_i64).is_ok());
        assert!(min(2_i64, 1_i64).is_ok());
        assert!(min(u64::MAX, 0).is_ok());
    }

    #[test]
    fn test_min_default_message_has_value_and_minimum() {
        let err = min(0, 1).unwrap_err();
        assert_eq!(err.message(), "Value must be greater than or equal to 1. 0 given");
    }

    #[test]
    fn test_min_custom_message() {
        let err = min_with(0.5_f32, 1.5_f32, "Value is not greater than {minimum}").unwrap_err();
        assert_eq!(err.message(), "Value is not greater than 1.5");
    }

    #[test]
    fn test_min_nan_fails() {
        assert!(min(f64::NAN, 0.0).is_err());
        assert!(min(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_min_non_numeric_ordering() {
        assert!(min("beta", "alpha").is_ok());
        assert!(min('a', 'b').is_err());
    }

    #[test]
    fn test_min_by_reference() {
        let limit = String::from("m");
        assert!(min(&String::from("z"), &limit).is_ok());
        assert!(min(&String::from("a"), &limit).is_err());
    }
}
