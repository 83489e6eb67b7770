//! Sign In Use Case
//!
//! Exchanges email + password for a provider session.

use std::sync::Arc;

use kernel::Identity;
use serde_json::Value;

use crate::domain::gateway::IdentityProvider;
use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

/// Sign in input
#[derive(Default)]
pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign in output. Both payloads are the provider's, unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInOutput {
    pub session: Value,
    pub user: Identity,
}

/// Sign in use case
pub struct SignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = input
            .email
            .and_then(Email::new)
            .ok_or(AuthError::MissingCredentials)?;
        let password = input
            .password
            .and_then(Password::new)
            .ok_or(AuthError::MissingCredentials)?;

        let result = self.provider.sign_in_with_password(&email, &password).await;

        match result {
            Ok(session) => {
                tracing::info!(
                    user_id = session.user.id().unwrap_or("-"),
                    email_domain = %email.domain(),
                    "User signed in"
                );
                Ok(SignInOutput {
                    session: session.session,
                    user: session.user,
                })
            }
            Err(e) => {
                tracing::info!(email_domain = %email.domain(), error = %e, "Sign in failed");
                Err(e.into())
            }
        }
    }
}
