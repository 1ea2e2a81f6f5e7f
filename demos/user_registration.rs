//! User registration example
//!
//! Guards a registration request with precondition checks, using a
//! project-wide set of messages and a few call-site overrides.
//!
//! Run with `cargo run --example user_registration --features tracing` to
//! also see a debug event for every failed check.

use preconditions::prelude::*;

#[derive(Debug)]
struct Registration<'a> {
    username: Option<&'a str>,
    email: &'a str,
    invite_code: &'a str,
    age: u8,
    roles: Vec<&'a str>,
}

const RESERVED: [&str; 3] = ["admin", "root", "system"];

fn register(checks: &Assertions, form: &Registration<'_>) -> Result<(), InvalidArgument> {
    checks.not_null(&form.username)?;
    checks.not_blank(form.username)?;
    if let Some(username) = form.username {
        checks.not_in_with(&username, &RESERVED, "'{value}' is reserved")?;
    }
    checks.pattern_with(form.email, r"^[^@\s]+@[^@\s]+\.[a-z]+$", "'{value}' is not an email")?;
    checks.uuid(form.invite_code)?;
    checks.min(form.age, 13)?;
    checks.not_empty(&form.roles)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let checks = Assertions::new(
        Messages::default()
            .with_not_null("A username is required")
            .with_min("You must be at least {minimum} to register ({value} given)"),
    );

    let forms = [
        Registration {
            username: Some("jane"),
            email: "jane@example.com",
            invite_code: "2ce88a3b-d393-4013-8ebc-7f8c9e0a6b01",
            age: 34,
            roles: vec!["editor"],
        },
        Registration {
            username: None,
            email: "anon@example.com",
            invite_code: "2ce88a3b-d393-4013-8ebc-7f8c9e0a6b01",
            age: 20,
            roles: vec!["viewer"],
        },
        Registration {
            username: Some("root"),
            email: "root@example.com",
            invite_code: "2ce88a3b-d393-4013-8ebc-7f8c9e0a6b01",
            age: 40,
            roles: vec!["admin"],
        },
        Registration {
            username: Some("kid"),
            email: "kid@example.com",
            invite_code: "2ce88a3b-d393-4013-8ebc-7f8c9e0a6b01",
            age: 9,
            roles: vec!["viewer"],
        },
        Registration {
            username: Some("bob"),
            email: "bob at example",
            invite_code: "not-an-invite",
            age: 50,
            roles: Vec::new(),
        },
    ];

    for form in &forms {
        match register(&checks, form) {
            Ok(()) => println!("✓ registered {:?}", form.username),
            Err(err) => println!("✗ rejected {:?}: {}", form.username, err),
        }
    }
}
