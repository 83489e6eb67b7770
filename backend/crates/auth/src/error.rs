//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::account_type::InvalidAccountType;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::credential::HeaderError;
use thiserror::Error;

use crate::domain::gateway::ProviderError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A sign-up field is missing or blank
    #[error("All fields are required")]
    MissingSignUpFields,

    /// Email or password missing on sign-in
    #[error("Email and password are required")]
    MissingCredentials,

    /// `userType` outside {student, college}
    #[error(transparent)]
    InvalidAccountType(#[from] InvalidAccountType),

    /// `confirmPassword` was sent and differs from `password`
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Request body is not the expected JSON
    #[error("Invalid JSON body")]
    MalformedBody(String),

    /// No `Authorization` header
    #[error("Missing authorization header")]
    MissingAppCredential,

    /// `Authorization` header present but not an accepted application key
    #[error("Invalid application credential")]
    InvalidAppCredential,

    /// The identity provider refused the request; message is the provider's
    #[error("{0}")]
    ProviderRejected(String),

    /// The identity provider could not be reached or answered nonsense
    #[error("Identity provider failure: {0}")]
    ProviderFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingSignUpFields
            | AuthError::MissingCredentials
            | AuthError::InvalidAccountType(_)
            | AuthError::PasswordMismatch
            | AuthError::MalformedBody(_)
            | AuthError::ProviderRejected(_) => ErrorKind::BadRequest,
            AuthError::MissingAppCredential | AuthError::InvalidAppCredential => {
                ErrorKind::Unauthorized
            }
            AuthError::ProviderFailure(_) | AuthError::Config(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::ProviderFailure(msg) => {
                tracing::error!(reason = %msg, "Identity provider failure");
            }
            AuthError::Config(msg) | AuthError::Internal(msg) => {
                tracing::error!(reason = %msg, "Auth internal error");
            }
            AuthError::ProviderRejected(msg) => {
                tracing::info!(reason = %msg, "Identity provider rejected request");
            }
            AuthError::MalformedBody(detail) => {
                tracing::debug!(detail = %detail, "Malformed request body");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected { message, .. } => AuthError::ProviderRejected(message),
            other => AuthError::ProviderFailure(other.to_string()),
        }
    }
}

impl From<HeaderError> for AuthError {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::Missing => AuthError::MissingAppCredential,
            HeaderError::Malformed => AuthError::InvalidAppCredential,
        }
    }
}
