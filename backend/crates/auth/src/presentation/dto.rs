//! API DTOs (Data Transfer Objects)

use kernel::Identity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{SignInInput, SignUpInput, SignUpOutput};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Every field is optional at the wire level so that a missing field yields
/// "All fields are required" instead of a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub user_type: Option<String>,
}

impl From<SignUpRequest> for SignUpInput {
    fn from(req: SignUpRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
            user_type: req.user_type,
        }
    }
}

/// The created account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub user_type: String,
}

impl From<SignUpOutput> for SignUpUser {
    fn from(output: SignUpOutput) -> Self {
        Self {
            id: output.id,
            email: output.email,
            name: output.name,
            user_type: output.user_type,
        }
    }
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub message: &'static str,
    pub user: SignUpUser,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<SignInRequest> for SignInInput {
    fn from(req: SignInRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Sign in response. `session` and `user` are the provider's payloads.
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub message: &'static str,
    pub session: Value,
    pub user: Identity,
}
