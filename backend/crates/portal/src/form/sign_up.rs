//! Sign-up form

use std::mem;
use std::sync::Arc;

use kernel::{AccountType, validation};

use crate::api::{ApiError, AuthApi, CreatedAccount, SignUpPayload};
use crate::error::{NETWORK_ERROR_MESSAGE, SubmitError};
use crate::form::InFlight;
use crate::form::field::{self, Field, FieldErrors};

pub const SIGN_UP_FAILED_MESSAGE: &str = "Failed to create account";
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Account created successfully! You can now sign in.";

/// Raw input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Account type code; empty until one is picked
    pub account_type: String,
}

impl SignUpFields {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::AccountType => self.account_type = value,
        }
    }

    /// Check every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<SignUpPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        if validation::is_blank(&self.first_name) {
            errors.insert(Field::FirstName, field::FIRST_NAME_REQUIRED);
        }
        if validation::is_blank(&self.last_name) {
            errors.insert(Field::LastName, field::LAST_NAME_REQUIRED);
        }
        field::check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(Field::Password, field::PASSWORD_REQUIRED);
        } else if !validation::is_long_enough_password(&self.password) {
            errors.insert(Field::Password, field::PASSWORD_TOO_SHORT);
        }

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, field::CONFIRM_PASSWORD_REQUIRED);
        } else if self.confirm_password != self.password {
            errors.insert(Field::ConfirmPassword, field::PASSWORDS_DO_NOT_MATCH);
        }

        let account_type = self.account_type.parse::<AccountType>().ok();
        if account_type.is_none() {
            errors.insert(Field::AccountType, field::ACCOUNT_TYPE_REQUIRED);
        }

        match account_type {
            Some(user_type) if errors.is_empty() => Ok(SignUpPayload {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                user_type,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFormState {
    pub fields: SignUpFields,
    pub errors: FieldErrors,
    pub general_error: Option<String>,
    pub loading: bool,
    pub success_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpAction {
    Edit(Field, String),
    ValidationFailed(FieldErrors),
    RequestStarted,
    Succeeded,
    Failed(String),
}

impl SignUpFormState {
    pub fn reduce(mut self, action: SignUpAction) -> Self {
        match action {
            SignUpAction::Edit(field, value) => {
                self.fields.set(field, value);
                self.errors.remove(field);
                self.general_error = None;
            }
            SignUpAction::ValidationFailed(errors) => {
                self.errors = errors;
                self.general_error = None;
            }
            SignUpAction::RequestStarted => {
                if !self.loading {
                    self.loading = true;
                    self.errors = FieldErrors::new();
                    self.general_error = None;
                    self.success_message = None;
                }
            }
            SignUpAction::Succeeded => {
                self.loading = false;
                self.fields = SignUpFields::default();
                self.success_message = Some(SIGN_UP_SUCCESS_MESSAGE.to_string());
            }
            SignUpAction::Failed(message) => {
                self.loading = false;
                self.general_error = Some(message);
            }
        }
        self
    }
}

/// Sign-up form controller
pub struct SignUpForm<A> {
    api: Arc<A>,
    state: SignUpFormState,
}

impl<A> SignUpForm<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: SignUpFormState::default(),
        }
    }

    pub fn state(&self) -> &SignUpFormState {
        &self.state
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(SignUpAction::Edit(field, value.into()));
    }

    fn dispatch(&mut self, action: SignUpAction) {
        self.state = mem::take(&mut self.state).reduce(action);
    }

    /// Validate, then send one sign-up request.
    ///
    /// On success the fields are cleared and the success message is set;
    /// switching to sign-in is left to the caller.
    pub async fn submit(&mut self) -> Result<CreatedAccount, SubmitError> {
        if self.state.loading {
            return Err(SubmitError::Busy);
        }

        let payload = match self.state.fields.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.dispatch(SignUpAction::ValidationFailed(errors.clone()));
                return Err(SubmitError::Validation(errors));
            }
        };

        self.dispatch(SignUpAction::RequestStarted);
        let in_flight = InFlight(&mut self.state.loading);
        let result = self.api.sign_up(&payload).await;
        drop(in_flight);

        match result {
            Ok(created) => {
                tracing::info!(user_id = %created.id, "Account created");
                self.dispatch(SignUpAction::Succeeded);
                Ok(created)
            }
            Err(ApiError::Rejected(message)) => {
                let message = message.unwrap_or_else(|| SIGN_UP_FAILED_MESSAGE.to_string());
                tracing::info!(error = %message, "Sign up rejected");
                self.dispatch(SignUpAction::Failed(message.clone()));
                Err(SubmitError::Rejected(message))
            }
            Err(ApiError::Network(detail)) => {
                tracing::warn!(error = %detail, "Network error during sign up");
                self.dispatch(SignUpAction::Failed(NETWORK_ERROR_MESSAGE.to_string()));
                Err(SubmitError::Network)
            }
        }
    }
}
