//! Precondition checks
//!
//! Each check evaluates one predicate on a call argument and returns
//! `Err(InvalidArgument)` with a rendered message when it does not hold.
//! Checks come in two forms:
//!
//! - `check(..)` renders the default template from [`Messages`],
//! - `check_with(.., message)` renders a caller-supplied template with the
//!   same arguments.
//!
//! The free functions use [`Assertions::DEFAULT`]; build an [`Assertions`]
//! with your own [`Messages`] to change the defaults project-wide.
//!
//! # Example
//!
//! ```rust
//! use preconditions::prelude::*;
//!
//! fn register(username: &str, age: u8) -> Result<(), InvalidArgument> {
//!     not_blank_with(username, "Username cannot be blank. '{value}' given")?;
//!     min_with(age, 18, "Must be at least {minimum}, got {value}")?;
//!     Ok(())
//! }
//!
//! assert!(register("jane", 30).is_ok());
//! assert_eq!(
//!     register("jane", 12).unwrap_err().message(),
//!     "Must be at least 18, got 12"
//! );
//! ```

mod collection;
mod number;
mod string;
mod value;

use crate::error::InvalidArgument;
use crate::messages::Messages;
use crate::template::{render, Arg};

pub use collection::{not_empty, not_empty_with, not_in, not_in_with};
pub use number::{min, min_with};
pub use string::{not_blank, not_blank_with, pattern, pattern_with, uuid, uuid_with};
pub use value::{is_true, is_true_with, not_null, not_null_with};

/// A set of checks sharing one configuration of default messages.
///
/// # Example
///
/// ```rust
/// use preconditions::{Assertions, Messages};
///
/// let strict = Assertions::new(Messages::default().with_not_null("Field is required"));
///
/// let missing: Option<u32> = None;
/// assert_eq!(strict.not_null(&missing).unwrap_err().message(), "Field is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assertions {
    messages: Messages,
}

impl Assertions {
    /// Checks using the built-in messages.
    pub const DEFAULT: Assertions = Assertions {
        messages: Messages::DEFAULT,
    };

    /// Create checks whose default messages come from `messages`.
    pub const fn new(messages: Messages) -> Self {
        Self { messages }
    }

    /// The default messages in use.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl From<Messages> for Assertions {
    fn from(messages: Messages) -> Self {
        Self::new(messages)
    }
}

/// Render the failure message of `check` and wrap it in the error.
fn report(check: &'static str, template: &str, args: &[Arg<'_>]) -> InvalidArgument {
    let message = render(template, args);

    #[cfg(feature = "tracing")]
    tracing::debug!(check = check, message = %message);
    #[cfg(not(feature = "tracing"))]
    let _ = check;

    InvalidArgument::new(message)
}

/// How absent strings appear in messages.
const NULL: &str = "null";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_default_messages() {
        assert_eq!(Assertions::default(), Assertions::DEFAULT);
        assert_eq!(Assertions::DEFAULT.messages(), &Messages::DEFAULT);
    }

    #[test]
    fn test_from_messages() {
        let assertions = Assertions::from(Messages::default().with_is_true("nope"));
        assert_eq!(assertions.messages().is_true, "nope");
    }

    #[test]
    fn test_report_renders_template() {
        let args = [Arg::new("value", 0), Arg::new("minimum", 1)];
        let err = report("min", "{value} < {minimum}", &args);
        assert_eq!(err.message(), "0 < 1");
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_failed_check_emits_event() {
        let _ = min(0, 1);
        assert!(logs_contain(r#"check="min""#));
        assert!(logs_contain("Value must be greater than or equal to 1. 0 given"));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_failed_check_event_fields() {
        use std::fmt;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        type Fields = Arc<Mutex<Vec<(String, String)>>>;

        struct Recorder<'a>(&'a mut Vec<(String, String)>);

        impl Visit for Recorder<'_> {
            fn record_str(&mut self, field: &Field, value: &str) {
                self.0.push((field.name().to_string(), value.to_string()));
            }

            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.push((field.name().to_string(), format!("{:?}", value)));
            }
        }

        struct Capture(Fields);

        impl<S: tracing::Subscriber> Layer<S> for Capture {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = self.0.lock().unwrap();
                event.record(&mut Recorder(&mut fields));
            }
        }

        let fields = Fields::default();
        let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&fields)));
        tracing::subscriber::with_default(subscriber, || {
            let _ = not_blank_with(" ", "'{value}' is blank");
        });

        let fields = fields.lock().unwrap();
        assert_eq!(
            *fields,
            vec![
                ("check".to_string(), "not_blank".to_string()),
                ("message".to_string(), "' ' is blank".to_string()),
            ]
        );
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_passing_check_is_silent() {
        let _ = min(1, 0);
        assert!(!logs_contain("check="));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Assertions>();
        assert_send_sync::<Messages>();
    }
}
