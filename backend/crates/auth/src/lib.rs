//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, registration, identity provider gateway trait
//! - `application/` - Use cases and configuration
//! - `infra/` - GoTrue (Supabase Auth) client
//! - `presentation/` - HTTP handlers, DTOs, router, credential middleware
//!
//! ## Routes
//! - `POST /signup` - create an account (email confirmed immediately)
//! - `POST /signin` - exchange email + password for a provider session
//!
//! ## Security Model
//! - Credentials, password hashing and sessions belong to the identity provider
//! - Callers present an application key as `Authorization: Bearer <key>`
//! - The service-role key never leaves the server
//! - 5xx responses never carry internal detail

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use error::{AuthError, AuthResult};
pub use infra::gotrue::GoTrueIdentityProvider;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

pub mod models {
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
