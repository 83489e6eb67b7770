//! Auth endpoint client
//!
//! [`AuthApi`] is the seam between the forms and the network. [`HttpAuthApi`]
//! talks to the real endpoints; tests substitute their own implementation.

use std::fmt;

use kernel::{AccountType, Identity};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::PortalConfig;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx answer; carries the body's `error` string when there is one
    #[error("rejected: {}", .0.as_deref().unwrap_or("<no message>"))]
    Rejected(Option<String>),

    /// Could not reach the server, or could not read its answer
    #[error("network: {0}")]
    Network(String),
}

/// Body of `POST /signup`
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_type: AccountType,
}

impl fmt::Debug for SignUpPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("user_type", &self.user_type)
            .finish()
    }
}

/// Body of `POST /signin`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignInPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInPayload")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// `user` of a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAccount {
    pub id: String,
    pub email: String,
    pub name: String,
    pub user_type: String,
}

#[derive(Deserialize)]
struct SignUpResponse {
    user: CreatedAccount,
}

/// A successful sign-in, payloads as the server sent them
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignedIn {
    #[serde(default)]
    pub session: Value,
    pub user: Identity,
}

#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    async fn sign_up(&self, payload: &SignUpPayload) -> ApiResult<CreatedAccount>;

    async fn sign_in(&self, payload: &SignInPayload) -> ApiResult<SignedIn>;
}

/// [`AuthApi`] over HTTP
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    sign_up_url: String,
    sign_in_url: String,
    app_key: SecretString,
}

impl HttpAuthApi {
    pub fn new(config: &PortalConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            sign_up_url: config.endpoint("signup"),
            sign_in_url: config.endpoint("signin"),
            app_key: config.app_key.clone(),
        })
    }

    async fn post<B, R>(&self, url: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .bearer_auth(self.app_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url, error = %e, "Auth request failed");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        let json: Value = response.json().await.map_err(|e| {
            tracing::warn!(url, status = status.as_u16(), error = %e, "Unreadable auth response");
            ApiError::Network(e.to_string())
        })?;

        if !status.is_success() {
            let message = json
                .get("error")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            tracing::debug!(url, status = status.as_u16(), reason = ?message, "Auth request rejected");
            return Err(ApiError::Rejected(message));
        }

        serde_json::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
    }
}

impl AuthApi for HttpAuthApi {
    async fn sign_up(&self, payload: &SignUpPayload) -> ApiResult<CreatedAccount> {
        let response: SignUpResponse = self.post(&self.sign_up_url, payload).await?;
        Ok(response.user)
    }

    async fn sign_in(&self, payload: &SignInPayload) -> ApiResult<SignedIn> {
        self.post(&self.sign_in_url, payload).await
    }
}
