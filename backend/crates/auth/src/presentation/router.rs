//! Auth Router

use axum::{Router, middleware::from_fn_with_state, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::gateway::IdentityProvider;
use crate::infra::gotrue::GoTrueIdentityProvider;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_app_credential;

/// Create the Auth router backed by the GoTrue provider
pub fn auth_router(provider: GoTrueIdentityProvider, config: &AuthConfig) -> Router {
    auth_router_generic(provider, config)
}

/// Create a generic Auth router for any identity provider implementation
pub fn auth_router_generic<P>(provider: P, config: &AuthConfig) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let state = AuthAppState {
        provider: Arc::new(provider),
    };
    let app_keys = Arc::new(config.app_keys.clone());

    Router::new()
        .route("/signup", post(handlers::sign_up::<P>))
        .route("/signin", post(handlers::sign_in::<P>))
        .route_layer(from_fn_with_state(app_keys, require_app_credential))
        .with_state(state)
}
