//! Auth Middleware
//!
//! Application credential check for the auth routes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::client::extract_client_info;
use platform::credential::{AppKeys, extract_bearer_token};

use crate::error::AuthError;

/// Require `Authorization: Bearer <key>` with an accepted application key.
///
/// On success the caller's [`platform::client::ClientInfo`] is stored in the
/// request extensions for handlers to log.
pub async fn require_app_credential(
    State(keys): State<Arc<AppKeys>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client = extract_client_info(req.headers(), direct_ip);

    let token = extract_bearer_token(req.headers()).inspect_err(|e| {
        tracing::debug!(ip = %client.ip_string(), error = %e, "Rejected auth request");
    })?;

    if !keys.accepts(token) {
        tracing::warn!(
            ip = %client.ip_string(),
            user_agent = %client.user_agent_str(),
            "Unknown application credential"
        );
        return Err(AuthError::InvalidAppCredential);
    }

    req.extensions_mut().insert(client);
    Ok(next.run(req).await)
}
