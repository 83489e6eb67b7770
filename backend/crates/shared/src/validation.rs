//! Field validation rules
//!
//! Rules shared by the sign-up and sign-in forms and the endpoint handler.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, in Unicode scalar values (not UTF-16 units)
pub const PASSWORD_MIN_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose `local@domain.tld` check. Real verification is the provider's job.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_long_enough_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
}

/// A field counts as filled when it has non-whitespace content.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
