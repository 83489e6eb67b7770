//! Bearer credential handling
//!
//! Callers identify the calling application with `Authorization: Bearer <key>`.
//! The key is a public application key (the provider's anon key), not a user
//! session token.

use axum::http::{HeaderMap, header};
use secrecy::{ExposeSecret, SecretString};

use crate::crypto::secrets_match;

/// Error when reading the Authorization header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("Missing authorization header")]
    Missing,
    #[error("Malformed authorization header")]
    Malformed,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively; an empty token is malformed.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, HeaderError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(HeaderError::Missing)?
        .to_str()
        .map_err(|_| HeaderError::Malformed)?;

    let (scheme, token) = value.split_once(' ').ok_or(HeaderError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(HeaderError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(HeaderError::Malformed);
    }
    Ok(token)
}

/// Set of accepted application keys
#[derive(Clone, Default)]
pub struct AppKeys(Vec<SecretString>);

impl AppKeys {
    pub fn new(keys: impl IntoIterator<Item = SecretString>) -> Self {
        Self(
            keys.into_iter()
                .filter(|k| !k.expose_secret().is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated list, ignoring blanks
    pub fn from_csv(csv: &str) -> Self {
        Self::new(
            csv.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(|k| SecretString::from(k.to_string())),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Every configured key is compared, so timing does not reveal which one matched.
    pub fn accepts(&self, presented: &str) -> bool {
        self.0.iter().fold(false, |found, key| {
            secrets_match(presented.as_bytes(), key.expose_secret().as_bytes()) | found
        })
    }
}

impl std::fmt::Debug for AppKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AppKeys")
            .field(&format_args!("[{} REDACTED]", self.0.len()))
            .finish()
    }
}
