//! Message template substitution
//!
//! Failure messages are templates filled in with the arguments of the
//! failed check. Placeholders may refer to an argument by name, by
//! zero-based index, or implicitly by position:
//!
//! | Placeholder | Meaning |
//! |---|---|
//! | `{value}` | argument named `value` |
//! | `{1}` | second argument |
//! | `{}` | next argument, counting only `{}` placeholders |
//! | `{{`, `}}` | literal brace |
//!
//! A placeholder that matches no argument is copied to the output as is,
//! so rendering never fails.
//!
//! # Example
//!
//! ```
//! use preconditions::template::{render, Arg};
//!
//! let args = [Arg::new("value", 0), Arg::new("minimum", 1)];
//!
//! assert_eq!(render("{minimum} > {value}", &args), "1 > 0");
//! assert_eq!(render("{1} > {0}", &args), "1 > 0");
//! assert_eq!(render("{} < {}", &args), "0 < 1");
//! assert_eq!(render("{{{missing}}}", &args), "{{missing}}");
//! ```

use std::fmt;

/// A named value available to a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg<'a> {
    name: &'a str,
    value: String,
}

impl<'a> Arg<'a> {
    /// Create an argument from anything `Display`.
    pub fn new(name: &'a str, value: impl fmt::Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }

    /// Name used by `{name}` placeholders.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Rendered value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Substitute `args` into `template`.
///
/// See the [module docs](self) for the placeholder syntax.
pub fn render(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut implicit = 0;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        // Unterminated placeholder: the remainder is literal text.
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };

        let key = &tail[1..close];
        match lookup(args, key, &mut implicit) {
            Some(value) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

fn lookup<'a>(args: &'a [Arg<'_>], key: &str, implicit: &mut usize) -> Option<&'a str> {
    let arg = if key.is_empty() {
        let index = *implicit;
        *implicit += 1;
        args.get(index)
    } else if let Ok(index) = key.parse::<usize>() {
        args.get(index)
    } else {
        args.iter().find(|arg| arg.name == key)
    };

    arg.map(Arg::value)
}

/// Render a sequence as the `", "`-joined `Display` output of its items.
///
/// ```
/// use preconditions::template::join;
///
/// assert_eq!(join(&[30, 20, 10]), "30, 20, 10");
/// assert_eq!(join::<i32>(&[]), "");
/// ```
pub fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
