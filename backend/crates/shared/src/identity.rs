//! Identity - Provider-owned user object
//!
//! The identity provider owns the shape of its user object. We carry it as an
//! untyped JSON value and only ever read four fields from it:
//! `id`, `email`, `user_metadata.name` and `user_metadata.userType`.
//! Everything else passes through untouched, so a client receives exactly what
//! the provider returned.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque identity payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Value);

impl Identity {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// `user_metadata.name`
    pub fn display_name(&self) -> Option<&str> {
        self.metadata_str("name")
    }

    /// `user_metadata.userType`, as written at sign-up.
    ///
    /// Returned raw: an identity created outside this system may carry any
    /// string here.
    pub fn user_type(&self) -> Option<&str> {
        self.metadata_str("userType")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.0
            .get("user_metadata")
            .and_then(|meta| meta.get(key))
            .and_then(Value::as_str)
    }
}
