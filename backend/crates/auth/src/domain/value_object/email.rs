//! Email Value Object
//!
//! The address is forwarded to the identity provider as typed; format checks
//! and normalization are the provider's job. We only refuse blank input.

use serde::Serialize;
use std::fmt;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// `None` for blank input
    pub fn new(email: impl Into<String>) -> Option<Self> {
        let email = email.into();
        (!kernel::validation::is_blank(&email)).then_some(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, for log fields. Empty when there is no `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
