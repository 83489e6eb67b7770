//! Password Value Object
//!
//! Cleartext password on its way to the identity provider. Strength rules are
//! enforced by the provider (and by the sign-up form); here we only refuse an
//! empty value and keep the secret out of logs.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    /// `None` for an empty string. Whitespace counts as a password.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        (!raw.is_empty()).then(|| Self(SecretString::from(raw)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Exact comparison against a confirmation value
    pub fn matches(&self, other: &str) -> bool {
        platform::crypto::secrets_match(self.expose().as_bytes(), other.as_bytes())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
