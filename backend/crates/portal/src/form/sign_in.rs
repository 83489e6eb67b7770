//! Sign-in form

use std::mem;
use std::sync::Arc;

use kernel::Identity;

use crate::api::{ApiError, AuthApi, SignInPayload};
use crate::error::{NETWORK_ERROR_MESSAGE, SubmitError};
use crate::form::InFlight;
use crate::form::field::{self, Field, FieldErrors};

pub const SIGN_IN_FAILED_MESSAGE: &str = "Failed to sign in";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInFields {
    pub email: String,
    pub password: String,
}

impl SignInFields {
    pub fn validate(&self) -> Result<SignInPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        field::check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert(Field::Password, field::PASSWORD_REQUIRED);
        }

        if errors.is_empty() {
            Ok(SignInPayload {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInFormState {
    pub fields: SignInFields,
    pub errors: FieldErrors,
    pub general_error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInAction {
    /// Edits to fields this form does not have are ignored
    Edit(Field, String),
    ValidationFailed(FieldErrors),
    RequestStarted,
    Succeeded,
    Failed(String),
}

impl SignInFormState {
    pub fn reduce(mut self, action: SignInAction) -> Self {
        match action {
            SignInAction::Edit(field, value) => {
                match field {
                    Field::Email => self.fields.email = value,
                    Field::Password => self.fields.password = value,
                    _ => return self,
                }
                self.errors.remove(field);
                self.general_error = None;
            }
            SignInAction::ValidationFailed(errors) => {
                self.errors = errors;
                self.general_error = None;
            }
            SignInAction::RequestStarted => {
                if !self.loading {
                    self.loading = true;
                    self.errors = FieldErrors::new();
                    self.general_error = None;
                }
            }
            SignInAction::Succeeded => self.loading = false,
            SignInAction::Failed(message) => {
                self.loading = false;
                self.general_error = Some(message);
            }
        }
        self
    }
}

/// Sign-in form controller
pub struct SignInForm<A> {
    api: Arc<A>,
    state: SignInFormState,
}

impl<A> SignInForm<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: SignInFormState::default(),
        }
    }

    pub fn state(&self) -> &SignInFormState {
        &self.state
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(SignInAction::Edit(field, value.into()));
    }

    fn dispatch(&mut self, action: SignInAction) {
        self.state = mem::take(&mut self.state).reduce(action);
    }

    /// Validate, then send one sign-in request. Returns the server's `user` verbatim.
    pub async fn submit(&mut self) -> Result<Identity, SubmitError> {
        if self.state.loading {
            return Err(SubmitError::Busy);
        }

        let payload = match self.state.fields.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.dispatch(SignInAction::ValidationFailed(errors.clone()));
                return Err(SubmitError::Validation(errors));
            }
        };

        self.dispatch(SignInAction::RequestStarted);
        let in_flight = InFlight(&mut self.state.loading);
        let result = self.api.sign_in(&payload).await;
        drop(in_flight);

        match result {
            Ok(signed_in) => {
                tracing::info!(user_id = signed_in.user.id().unwrap_or("-"), "Signed in");
                self.dispatch(SignInAction::Succeeded);
                Ok(signed_in.user)
            }
            Err(ApiError::Rejected(message)) => {
                let message = message.unwrap_or_else(|| SIGN_IN_FAILED_MESSAGE.to_string());
                tracing::info!(error = %message, "Sign in rejected");
                self.dispatch(SignInAction::Failed(message.clone()));
                Err(SubmitError::Rejected(message))
            }
            Err(ApiError::Network(detail)) => {
                tracing::warn!(error = %detail, "Network error during sign in");
                self.dispatch(SignInAction::Failed(NETWORK_ERROR_MESSAGE.to_string()));
                Err(SubmitError::Network)
            }
        }
    }
}
