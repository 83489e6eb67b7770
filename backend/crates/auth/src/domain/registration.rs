//! Registration
//!
//! A validated sign-up request, ready to be handed to the identity provider.

use kernel::AccountType;
use serde::Serialize;

use crate::domain::value_object::{email::Email, full_name::FullName, password::Password};

#[derive(Debug, Clone)]
pub struct Registration {
    pub name: FullName,
    pub email: Email,
    pub password: Password,
    pub account_type: AccountType,
}

/// Metadata stored on the provider's user record.
///
/// Field names are part of the stored data; clients read `name` and `userType` back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: AccountType,
}

impl Registration {
    pub fn new(name: FullName, email: Email, password: Password, account_type: AccountType) -> Self {
        Self {
            name,
            email,
            password,
            account_type,
        }
    }

    pub fn metadata(&self) -> UserMetadata {
        UserMetadata {
            name: self.name.display(),
            first_name: self.name.first().to_string(),
            last_name: self.name.last().to_string(),
            user_type: self.account_type,
        }
    }
}
