//! Auth Manager
//!
//! Decides what the visitor sees: the sign-in form, the sign-up form, or the
//! profile panel once signed in. Nothing survives a reload; a new manager
//! always starts at sign-in with nobody signed in.

use std::sync::Arc;

use kernel::Identity;
use tokio::time::Instant;

use crate::api::AuthApi;
use crate::config::PortalConfig;
use crate::error::SubmitError;
use crate::form::{Field, SignInForm, SignInFormState, SignUpForm, SignUpFormState};
use crate::profile::ProfilePanel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthManagerState {
    pub view: View,
    pub identity: Option<Identity>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthManagerAction {
    ShowSignUp,
    ShowSignIn,
    /// The sign-up form finished and its redirect delay elapsed
    SignedUp,
    SignedIn(Identity),
    SignedOut,
}

impl AuthManagerState {
    pub fn reduce(mut self, action: AuthManagerAction) -> Self {
        match action {
            AuthManagerAction::ShowSignUp => self.view = View::SignUp,
            AuthManagerAction::ShowSignIn | AuthManagerAction::SignedUp => {
                self.view = View::SignIn;
            }
            AuthManagerAction::SignedIn(identity) => self.identity = Some(identity),
            AuthManagerAction::SignedOut => {
                self.identity = None;
                self.view = View::SignIn;
            }
        }
        self
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

enum ActiveForm<A> {
    SignIn(SignInForm<A>),
    SignUp(SignUpForm<A>),
}

/// What to render right now
#[derive(Debug)]
pub enum Screen<'a> {
    Profile(ProfilePanel),
    SignIn(&'a SignInFormState),
    SignUp(&'a SignUpFormState),
}

pub struct AuthManager<A> {
    api: Arc<A>,
    config: PortalConfig,
    state: AuthManagerState,
    form: ActiveForm<A>,
    /// When the sign-up success message gives way to sign-in
    redirect_at: Option<Instant>,
}

impl<A> AuthManager<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>, config: PortalConfig) -> Self {
        let form = ActiveForm::SignIn(SignInForm::new(api.clone()));
        Self {
            api,
            config,
            state: AuthManagerState::default(),
            form,
            redirect_at: None,
        }
    }

    pub fn state(&self) -> &AuthManagerState {
        &self.state
    }

    pub fn screen(&self) -> Screen<'_> {
        if let Some(identity) = &self.state.identity {
            return Screen::Profile(ProfilePanel::from(identity));
        }
        match &self.form {
            ActiveForm::SignIn(form) => Screen::SignIn(form.state()),
            ActiveForm::SignUp(form) => Screen::SignUp(form.state()),
        }
    }

    pub fn show_sign_up(&mut self) {
        self.dispatch(AuthManagerAction::ShowSignUp);
    }

    pub fn show_sign_in(&mut self) {
        self.dispatch(AuthManagerAction::ShowSignIn);
    }

    pub fn sign_out(&mut self) {
        if let Some(id) = self.state.identity.as_ref().and_then(Identity::id) {
            tracing::info!(user_id = %id, "Signed out");
        }
        self.dispatch(AuthManagerAction::SignedOut);
    }

    /// Forward an edit to the form on screen
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        match &mut self.form {
            ActiveForm::SignIn(form) => form.edit(field, value),
            ActiveForm::SignUp(form) => form.edit(field, value),
        }
    }

    /// Submit the form on screen.
    ///
    /// A successful sign-up leaves the sign-up form showing its success
    /// message and schedules the move to sign-in; see [`Self::complete_sign_up`].
    /// A successful sign-in stores the returned identity as is.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if self.state.is_signed_in() {
            return Ok(());
        }

        match &mut self.form {
            ActiveForm::SignUp(form) => {
                form.submit().await?;
                self.redirect_at = Some(Instant::now() + self.config.sign_up_redirect_delay);
            }
            ActiveForm::SignIn(form) => {
                let identity = form.submit().await?;
                self.dispatch(AuthManagerAction::SignedIn(identity));
            }
        }
        Ok(())
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect_at.is_some()
    }

    /// Wait out the redirect delay after a sign-up, then show a fresh sign-in
    /// form. Returns at once if no sign-up is waiting, including when the
    /// visitor already switched views.
    pub async fn complete_sign_up(&mut self) {
        let Some(deadline) = self.redirect_at else {
            return;
        };
        tokio::time::sleep_until(deadline).await;
        self.dispatch(AuthManagerAction::SignedUp);
    }

    /// Apply an action. A view change discards the old form and its state.
    fn dispatch(&mut self, action: AuthManagerAction) {
        let previous = self.state.view;
        self.state = std::mem::take(&mut self.state).reduce(action);

        if self.state.view != previous {
            self.redirect_at = None;
            self.form = match self.state.view {
                View::SignIn => ActiveForm::SignIn(SignInForm::new(self.api.clone())),
                View::SignUp => ActiveForm::SignUp(SignUpForm::new(self.api.clone())),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::test_support::FakeApi;
    use crate::form::sign_up::SIGN_UP_SUCCESS_MESSAGE;
    use crate::form::{SignInFields, SignUpFields};
    use secrecy::SecretString;
    use serde_json::json;
    use std::time::Duration;

    fn manager(api: FakeApi) -> AuthManager<FakeApi> {
        let config = PortalConfig::new("http://localhost/api/auth", SecretString::from("k".to_string()));
        AuthManager::new(Arc::new(api), config)
    }

    fn fill_sign_up(manager: &mut AuthManager<FakeApi>) {
        for (field, value) in [
            (Field::FirstName, "John"),
            (Field::LastName, "Doe"),
            (Field::Email, "john@example.com"),
            (Field::Password, "secret123"),
            (Field::ConfirmPassword, "secret123"),
            (Field::AccountType, "student"),
        ] {
            manager.edit(field, value);
        }
    }

    #[test]
    fn test_reducer_transitions() {
        let identity = Identity::new(json!({ "id": "u-1" }));
        let state = AuthManagerState::default();
        assert_eq!(state.view, View::SignIn);
        assert!(!state.is_signed_in());

        let state = state.reduce(AuthManagerAction::ShowSignUp);
        assert_eq!(state.view, View::SignUp);

        let state = state.reduce(AuthManagerAction::SignedUp);
        assert_eq!(state.view, View::SignIn);

        let state = state.reduce(AuthManagerAction::SignedIn(identity.clone()));
        assert_eq!(state.identity, Some(identity));

        let state = state
            .reduce(AuthManagerAction::ShowSignUp)
            .reduce(AuthManagerAction::SignedOut);
        assert_eq!(state, AuthManagerState::default());
    }

    #[test]
    fn test_switching_views_discards_form_state() {
        let mut manager = manager(FakeApi::default());
        manager.edit(Field::Email, "john@example.com");

        manager.show_sign_up();
        manager.edit(Field::FirstName, "John");
        manager.show_sign_in();

        match manager.screen() {
            Screen::SignIn(state) => assert_eq!(state.fields, SignInFields::default()),
            other => panic!("unexpected screen {other:?}"),
        }

        manager.show_sign_up();
        match manager.screen() {
            Screen::SignUp(state) => assert_eq!(state.fields, SignUpFields::default()),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_shows_success_then_moves_to_sign_in() {
        let mut manager = manager(FakeApi::default());
        manager.show_sign_up();
        fill_sign_up(&mut manager);

        manager.submit().await.unwrap();

        assert!(manager.redirect_pending());
        match manager.screen() {
            Screen::SignUp(state) => {
                assert_eq!(state.success_message.as_deref(), Some(SIGN_UP_SUCCESS_MESSAGE));
                assert_eq!(state.fields, SignUpFields::default());
                assert!(!state.loading);
            }
            other => panic!("unexpected screen {other:?}"),
        }

        let started = Instant::now();
        manager.complete_sign_up().await;

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert!(!manager.redirect_pending());
        assert_eq!(manager.state().view, View::SignIn);
        assert!(!manager.state().is_signed_in());
        match manager.screen() {
            Screen::SignIn(state) => assert_eq!(state.fields, SignInFields::default()),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_sign_up_drops_pending_redirect() {
        let mut manager = manager(FakeApi::default());
        manager.show_sign_up();
        fill_sign_up(&mut manager);
        manager.submit().await.unwrap();

        manager.show_sign_in();
        manager.edit(Field::Email, "john@example.com");
        assert!(!manager.redirect_pending());

        let started = Instant::now();
        manager.complete_sign_up().await;

        assert_eq!(started.elapsed(), Duration::ZERO);
        match manager.screen() {
            Screen::SignIn(state) => assert_eq!(state.fields.email, "john@example.com"),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_sign_up_stays_on_form() {
        let mut manager = manager(FakeApi::rejecting(Some("User already registered")));
        manager.show_sign_up();
        fill_sign_up(&mut manager);

        let err = manager.submit().await.unwrap_err();

        assert_eq!(err, SubmitError::Rejected("User already registered".into()));
        assert_eq!(manager.state().view, View::SignUp);
        assert!(!manager.redirect_pending());
        match manager.screen() {
            Screen::SignUp(state) => {
                assert_eq!(state.general_error.as_deref(), Some("User already registered"));
                assert_eq!(state.fields.first_name, "John");
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sign_in_then_sign_out() {
        let user = json!({
            "id": "u-1",
            "email": "john@example.com",
            "user_metadata": { "name": "John Doe", "userType": "college" }
        });
        let mut manager = manager(FakeApi::with_identity(user.clone()));
        manager.edit(Field::Email, "john@example.com");
        manager.edit(Field::Password, "secret123");

        manager.submit().await.unwrap();

        assert_eq!(
            manager.state().identity.as_ref().map(Identity::as_value),
            Some(&user)
        );
        match manager.screen() {
            Screen::Profile(panel) => assert_eq!(panel.name, "John Doe"),
            other => panic!("unexpected screen {other:?}"),
        }

        manager.sign_out();
        assert_eq!(manager.state(), &AuthManagerState::default());
        assert!(matches!(manager.screen(), Screen::SignIn(_)));
    }
}
