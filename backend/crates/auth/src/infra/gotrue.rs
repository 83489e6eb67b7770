//! GoTrue Identity Provider
//!
//! [`IdentityProvider`] over the GoTrue REST API (Supabase Auth).
//!
//! - user creation goes through the admin API with the service-role key,
//!   email confirmed up front
//! - sign-in uses the password grant with the public anon key

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use kernel::Identity;

use crate::application::config::AuthConfig;
use crate::domain::gateway::{IdentityProvider, ProviderError, ProviderResult, ProviderSession};
use crate::domain::registration::{Registration, UserMetadata};
use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users";
const PASSWORD_GRANT_PATH: &str = "/auth/v1/token?grant_type=password";

/// Keys of an error body that may carry the human-readable reason, in order of preference
const ERROR_MESSAGE_KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

#[derive(Serialize)]
struct CreateUserBody<'a> {
    email: &'a str,
    password: &'a str,
    email_confirm: bool,
    user_metadata: UserMetadata,
}

#[derive(Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// GoTrue client. Cheap to share behind `Arc`; the inner `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct GoTrueIdentityProvider {
    client: Client,
    admin_users_url: String,
    password_grant_url: String,
    service_role_key: SecretString,
    anon_key: SecretString,
}

impl GoTrueIdentityProvider {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.provider_timeout)
            .build()
            .map_err(|e| AuthError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            admin_users_url: config.provider_endpoint(ADMIN_USERS_PATH),
            password_grant_url: config.provider_endpoint(PASSWORD_GRANT_PATH),
            service_role_key: config.service_role_key.clone(),
            anon_key: config.anon_key.clone(),
        })
    }

    fn with_key(request: RequestBuilder, key: &SecretString) -> RequestBuilder {
        request
            .header("apikey", key.expose_secret())
            .bearer_auth(key.expose_secret())
    }

    /// Send and read the body as JSON, mapping failures to [`ProviderError`].
    async fn send(request: RequestBuilder) -> ProviderResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::UnexpectedResponse(e.to_string()))
    }

    async fn error_from(status: StatusCode, response: Response) -> ProviderError {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), reason = %message, "Identity provider error");
            ProviderError::Transport(format!("{status}: {message}"))
        } else {
            ProviderError::Rejected {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Pull the reason out of an error body, falling back to the raw body and then
/// the status reason phrase.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        ERROR_MESSAGE_KEYS
            .iter()
            .find_map(|key| {
                json.get(key)
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.trim().is_empty())
            })
            .map(str::to_string)
    });

    from_json
        .or_else(|| {
            let body = body.trim();
            (!body.is_empty() && !body.starts_with('{')).then(|| body.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Identity provider error")
                .to_string()
        })
}

/// The admin API answers with the user object; some deployments wrap it in `{ "user": ... }`.
fn created_user(body: Value) -> ProviderResult<Identity> {
    let user = match body {
        Value::Object(mut map) if !map.contains_key("id") && map.contains_key("user") => {
            map.remove("user").unwrap_or(Value::Null)
        }
        other => other,
    };

    if user.is_object() {
        Ok(Identity::new(user))
    } else {
        Err(ProviderError::UnexpectedResponse(
            "user creation returned no user object".to_string(),
        ))
    }
}

/// The token response is the session; its `user` field is the identity.
fn session_from(body: Value) -> ProviderResult<ProviderSession> {
    let user = body
        .get("user")
        .filter(|u| u.is_object())
        .cloned()
        .ok_or_else(|| {
            ProviderError::UnexpectedResponse("password grant returned no user".to_string())
        })?;

    let session = if body.get("access_token").is_some_and(Value::is_string) {
        body
    } else {
        Value::Null
    };

    Ok(ProviderSession {
        session,
        user: Identity::new(user),
    })
}

impl IdentityProvider for GoTrueIdentityProvider {
    async fn create_user(&self, registration: &Registration) -> ProviderResult<Identity> {
        let body = CreateUserBody {
            email: registration.email.as_str(),
            password: registration.password.expose(),
            email_confirm: true,
            user_metadata: registration.metadata(),
        };

        let request = Self::with_key(
            self.client.post(&self.admin_users_url),
            &self.service_role_key,
        )
        .json(&body);

        created_user(Self::send(request).await?)
    }

    async fn sign_in_with_password(
        &self,
        email: &Email,
        password: &Password,
    ) -> ProviderResult<ProviderSession> {
        let body = PasswordGrantBody {
            email: email.as_str(),
            password: password.expose(),
        };

        let request =
            Self::with_key(self.client.post(&self.password_grant_url), &self.anon_key).json(&body);

        session_from(Self::send(request).await?)
    }
}
