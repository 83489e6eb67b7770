//! Portal Configuration

use std::time::Duration;

use secrecy::SecretString;

/// Pause between a successful sign-up and the switch to the sign-in form
pub const SIGN_UP_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the auth routes, e.g. `https://api.example.org/api/auth`
    pub endpoint_base: String,
    /// Application key sent as `Authorization: Bearer <key>`
    pub app_key: SecretString,
    pub sign_up_redirect_delay: Duration,
}

impl PortalConfig {
    pub fn new(endpoint_base: impl Into<String>, app_key: SecretString) -> Self {
        Self {
            endpoint_base: endpoint_base.into().trim_end_matches('/').to_string(),
            app_key,
            sign_up_redirect_delay: SIGN_UP_REDIRECT_DELAY,
        }
    }

    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.endpoint_base, route.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let config = PortalConfig::new(
            "http://localhost:31113/api/auth/",
            SecretString::from("k".to_string()),
        );
        assert_eq!(config.endpoint("signup"), "http://localhost:31113/api/auth/signup");
        assert_eq!(config.endpoint("/signin"), "http://localhost:31113/api/auth/signin");
        assert_eq!(config.sign_up_redirect_delay, Duration::from_secs(2));
    }
}
