//! Identity Provider Gateway
//!
//! Interface to the hosted identity provider. Implementation is in the
//! infrastructure layer. The provider owns credential storage, password
//! hashing, session issuance and email confirmation.

use kernel::Identity;
use serde_json::Value;
use thiserror::Error;

use crate::domain::registration::Registration;
use crate::domain::value_object::{email::Email, password::Password};

/// Gateway result type alias
pub type ProviderResult<T> = Result<T, ProviderError>;

/// What went wrong talking to the provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with a 4xx and a reason
    /// (bad credentials, duplicate account, weak password, ...)
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider could not be reached, or answered with a 5xx
    #[error("provider unavailable: {0}")]
    Transport(String),

    /// A success response we could not make sense of
    #[error("unexpected provider response: {0}")]
    UnexpectedResponse(String),
}

/// Result of a password sign-in
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSession {
    /// Provider session payload, passed through untouched.
    /// `Null` when the provider returned a user but no access token.
    pub session: Value,
    /// Provider user payload, passed through untouched
    pub user: Identity,
}

/// Identity provider trait
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Create a user through the administrative API, with the email already confirmed
    async fn create_user(&self, registration: &Registration) -> ProviderResult<Identity>;

    /// Open a session with email + password
    async fn sign_in_with_password(
        &self,
        email: &Email,
        password: &Password,
    ) -> ProviderResult<ProviderSession>;
}
