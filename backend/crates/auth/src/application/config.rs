//! Application Configuration
//!
//! Configuration for the Auth application layer, read once at startup.

use std::time::Duration;

use platform::credential::AppKeys;
use secrecy::SecretString;
use thiserror::Error;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_ROUTE_PREFIX: &str = "/api/auth";

/// Error while reading configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity provider base URL, without trailing slash
    pub provider_url: String,
    /// Privileged key for the provider's admin API. Server-side only.
    pub service_role_key: SecretString,
    /// Public key for the provider's password grant
    pub anon_key: SecretString,
    /// Bearer keys accepted from calling applications
    pub app_keys: AppKeys,
    /// Timeout for every provider request
    pub provider_timeout: Duration,
    /// Where the auth router is nested
    pub route_prefix: String,
}

impl AuthConfig {
    pub fn new(
        provider_url: impl Into<String>,
        service_role_key: SecretString,
        anon_key: SecretString,
    ) -> Self {
        let app_keys = AppKeys::new([anon_key.clone()]);
        Self {
            provider_url: provider_url.into().trim_end_matches('/').to_string(),
            service_role_key,
            anon_key,
            app_keys,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }

    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary lookup. Blank values count as unset.
    pub fn from_env_map(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| get(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let provider_url = require("SUPABASE_URL")?;
        let service_role_key = SecretString::from(require("SUPABASE_SERVICE_ROLE_KEY")?);
        let anon_key = SecretString::from(require("SUPABASE_ANON_KEY")?);

        let mut config = Self::new(provider_url, service_role_key, anon_key);

        if let Some(csv) = get("ECOROOT_APP_KEYS") {
            let keys = AppKeys::from_csv(&csv);
            if keys.is_empty() {
                return Err(ConfigError::Invalid {
                    name: "ECOROOT_APP_KEYS",
                    value: "<redacted>".to_string(),
                });
            }
            config.app_keys = keys;
        }

        if let Some(raw) = get("ECOROOT_PROVIDER_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "ECOROOT_PROVIDER_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: "ECOROOT_PROVIDER_TIMEOUT_SECS",
                    value: raw,
                });
            }
            config.provider_timeout = Duration::from_secs(secs);
        }

        if let Some(prefix) = get("ECOROOT_ROUTE_PREFIX") {
            let trimmed = prefix.trim_end_matches('/');
            if !prefix.starts_with('/') || trimmed.is_empty() {
                return Err(ConfigError::Invalid {
                    name: "ECOROOT_ROUTE_PREFIX",
                    value: prefix,
                });
            }
            config.route_prefix = trimmed.to_string();
        }

        Ok(config)
    }

    /// Full URL of a provider endpoint, `path` starting with `/`
    pub fn provider_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.provider_url, path)
    }
}
