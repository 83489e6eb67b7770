//! Account Type
//!
//! The two kinds of EcoRoot accounts. Travels on the wire as `userType`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Student,
    College,
}

/// Rejected account type code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid user type. Must be student or college.")]
pub struct InvalidAccountType(pub String);

impl AccountType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AccountType::Student => "student",
            AccountType::College => "college",
        }
    }
}

impl FromStr for AccountType {
    type Err = InvalidAccountType;

    /// Codes are matched exactly; `"Student"` is not a valid account type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(AccountType::Student),
            "college" => Ok(AccountType::College),
            other => Err(InvalidAccountType(other.to_string())),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
