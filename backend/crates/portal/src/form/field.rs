//! Form fields and field-level errors

use std::collections::BTreeMap;

use kernel::validation;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const ACCOUNT_TYPE_REQUIRED: &str = "Please select your account type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AccountType,
}

/// At most one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

pub(crate) fn check_email(email: &str, errors: &mut FieldErrors) {
    if validation::is_blank(email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !validation::is_valid_email(email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, EMAIL_REQUIRED);
        errors.insert(Field::Email, EMAIL_INVALID);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_check_email() {
        let mut errors = FieldErrors::new();
        check_email("  ", &mut errors);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));

        let mut errors = FieldErrors::new();
        check_email("john@example", &mut errors);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));

        let mut errors = FieldErrors::new();
        check_email("john@example.com", &mut errors);
        assert!(errors.is_empty());
    }
}
