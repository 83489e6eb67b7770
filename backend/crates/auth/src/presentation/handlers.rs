//! HTTP Handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::Json;
use platform::client::ClientInfo;

use crate::application::{SignInUseCase, SignUpUseCase};
use crate::domain::gateway::IdentityProvider;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};

pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Account created successfully";
pub const SIGN_IN_SUCCESS_MESSAGE: &str = "Signed in successfully";

/// Shared state for auth handlers
pub struct AuthAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub provider: Arc<P>,
}

impl<P> Clone for AuthAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AuthError::MalformedBody(rejection.body_text()))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<P>(
    State(state): State<AuthAppState<P>>,
    Extension(client): Extension<ClientInfo>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<Json<SignUpResponse>>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let req = json_body(body)?;

    tracing::debug!(
        ip = %client.ip_string(),
        user_agent = %client.user_agent_str(),
        user_type = req.user_type.as_deref().unwrap_or("-"),
        "Sign up request"
    );

    let output = SignUpUseCase::new(state.provider.clone())
        .execute(req.into())
        .await?;

    Ok(Json(SignUpResponse {
        message: SIGN_UP_SUCCESS_MESSAGE,
        user: output.into(),
    }))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /signin
pub async fn sign_in<P>(
    State(state): State<AuthAppState<P>>,
    Extension(client): Extension<ClientInfo>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<Json<SignInResponse>>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let req = json_body(body)?;

    tracing::debug!(
        ip = %client.ip_string(),
        user_agent = %client.user_agent_str(),
        "Sign in request"
    );

    let output = SignInUseCase::new(state.provider.clone())
        .execute(req.into())
        .await?;

    Ok(Json(SignInResponse {
        message: SIGN_IN_SUCCESS_MESSAGE,
        session: output.session,
        user: output.user,
    }))
}
