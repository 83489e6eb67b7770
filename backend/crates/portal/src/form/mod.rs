//! Forms
//!
//! Each form is a state value plus a reducer, wrapped by a controller that
//! owns the state and performs the submit.

pub mod field;
pub mod sign_in;
pub mod sign_up;

pub use field::{Field, FieldErrors};
pub use sign_in::{SignInAction, SignInFields, SignInForm, SignInFormState};
pub use sign_up::{SignUpAction, SignUpFields, SignUpForm, SignUpFormState};

/// Holds a form's `loading` flag while a request is out and clears it on drop,
/// so a submit future dropped before completion leaves the form usable.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kernel::Identity;
    use serde_json::{Value, json};

    use crate::api::{
        ApiError, ApiResult, AuthApi, CreatedAccount, SignInPayload, SignUpPayload, SignedIn,
    };

    #[derive(Default)]
    enum Outcome {
        #[default]
        Accept,
        Reject(Option<String>),
        Offline,
    }

    /// Scripted [`AuthApi`] that counts answered calls
    #[derive(Default)]
    pub(crate) struct FakeApi {
        calls: AtomicUsize,
        /// Calls left that never resolve
        stalls: AtomicUsize,
        outcome: Outcome,
        identity: Option<Value>,
    }

    impl FakeApi {
        pub fn rejecting(message: Option<&str>) -> Self {
            Self {
                outcome: Outcome::Reject(message.map(str::to_string)),
                ..Default::default()
            }
        }

        pub fn offline() -> Self {
            Self {
                outcome: Outcome::Offline,
                ..Default::default()
            }
        }

        pub fn with_identity(identity: Value) -> Self {
            Self {
                identity: Some(identity),
                ..Default::default()
            }
        }

        /// Accepts, but the first call hangs forever
        pub fn stalling_once() -> Self {
            Self {
                stalls: AtomicUsize::new(1),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn stall_if_scripted(&self) {
            let stalled = self
                .stalls
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if stalled {
                std::future::pending::<()>().await;
            }
        }

        fn answer<T>(&self, accept: impl FnOnce() -> T) -> ApiResult<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Accept => Ok(accept()),
                Outcome::Reject(message) => Err(ApiError::Rejected(message.clone())),
                Outcome::Offline => Err(ApiError::Network("connection refused".into())),
            }
        }
    }

    impl AuthApi for FakeApi {
        async fn sign_up(&self, payload: &SignUpPayload) -> ApiResult<CreatedAccount> {
            self.stall_if_scripted().await;
            self.answer(|| CreatedAccount {
                id: "u-1".into(),
                email: payload.email.clone(),
                name: format!("{} {}", payload.first_name, payload.last_name),
                user_type: payload.user_type.code().into(),
            })
        }

        async fn sign_in(&self, payload: &SignInPayload) -> ApiResult<SignedIn> {
            self.stall_if_scripted().await;
            self.answer(|| SignedIn {
                session: json!({ "access_token": "jwt" }),
                user: Identity::new(
                    self.identity
                        .clone()
                        .unwrap_or_else(|| json!({ "id": "u-1", "email": payload.email })),
                ),
            })
        }
    }
}
