//! Profile panel shown once signed in

use kernel::Identity;

pub const PROFILE_TITLE: &str = "Welcome to EcoRoot!";
pub const PROFILE_TAGLINE: &str = "🌱 Ready to explore environmental education content!";
const NOT_AVAILABLE: &str = "N/A";

/// Text of the signed-in view, read from the identity's metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePanel {
    pub title: &'static str,
    pub subtitle: String,
    pub name: String,
    pub email: String,
    pub account_type: String,
    pub tagline: &'static str,
}

impl From<&Identity> for ProfilePanel {
    fn from(identity: &Identity) -> Self {
        let user_type = identity.user_type();
        Self {
            title: PROFILE_TITLE,
            subtitle: format!(
                "You're successfully signed in as a {}",
                user_type.unwrap_or("user")
            ),
            name: identity.display_name().unwrap_or(NOT_AVAILABLE).to_string(),
            email: identity.email().unwrap_or_default().to_string(),
            account_type: user_type.unwrap_or(NOT_AVAILABLE).to_string(),
            tagline: PROFILE_TAGLINE,
        }
    }
}
