//! Sign Up Use Case
//!
//! Validates a registration and creates the account at the identity provider.

use std::sync::Arc;

use kernel::AccountType;

use crate::domain::gateway::IdentityProvider;
use crate::domain::registration::Registration;
use crate::domain::value_object::{email::Email, full_name::FullName, password::Password};
use crate::error::{AuthError, AuthResult};

/// Sign up input, as received. Any field may be absent.
#[derive(Default)]
pub struct SignUpInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Only checked when present
    pub confirm_password: Option<String>,
    pub user_type: Option<String>,
}

/// The created account, as echoed back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutput {
    pub id: String,
    pub email: String,
    pub name: String,
    pub user_type: String,
}

/// Sign up use case
pub struct SignUpUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignUpUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let registration = Self::validate(input)?;

        let identity = self.provider.create_user(&registration).await?;

        let id = identity
            .id()
            .ok_or_else(|| AuthError::Internal("Provider user has no id".to_string()))?
            .to_string();

        let output = SignUpOutput {
            id,
            email: identity
                .email()
                .unwrap_or(registration.email.as_str())
                .to_string(),
            name: identity
                .display_name()
                .map(str::to_string)
                .unwrap_or_else(|| registration.name.display()),
            user_type: identity
                .user_type()
                .unwrap_or(registration.account_type.code())
                .to_string(),
        };

        tracing::info!(
            user_id = %output.id,
            email_domain = %registration.email.domain(),
            user_type = %registration.account_type,
            "User signed up"
        );

        Ok(output)
    }

    fn validate(input: SignUpInput) -> AuthResult<Registration> {
        let (Some(first), Some(last), Some(email), Some(password), Some(user_type)) = (
            input.first_name,
            input.last_name,
            input.email,
            input.password,
            input.user_type,
        ) else {
            return Err(AuthError::MissingSignUpFields);
        };

        let name = FullName::new(first, last).ok_or(AuthError::MissingSignUpFields)?;
        let email = Email::new(email).ok_or(AuthError::MissingSignUpFields)?;
        let password = Password::new(password).ok_or(AuthError::MissingSignUpFields)?;
        if kernel::validation::is_blank(&user_type) {
            return Err(AuthError::MissingSignUpFields);
        }
        let account_type: AccountType = user_type.parse()?;

        if let Some(confirm) = input.confirm_password {
            if !password.matches(&confirm) {
                return Err(AuthError::PasswordMismatch);
            }
        }

        Ok(Registration::new(name, email, password, account_type))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::gateway::{ProviderError, ProviderResult, ProviderSession};
    use kernel::Identity;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory provider that records calls and answers with a canned result
    pub(crate) struct FakeProvider {
        pub created: Mutex<Vec<Registration>>,
        pub sign_ins: Mutex<Vec<(String, String)>>,
        pub create_result: Mutex<Option<ProviderResult<Identity>>>,
        pub sign_in_result: Mutex<Option<ProviderResult<ProviderSession>>>,
    }

    impl FakeProvider {
        pub fn new() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                sign_ins: Mutex::new(Vec::new()),
                create_result: Mutex::new(None),
                sign_in_result: Mutex::new(None),
            }
        }

        pub fn failing_create(err: ProviderError) -> Self {
            let fake = Self::new();
            *fake.create_result.lock().unwrap() = Some(Err(err));
            fake
        }

        pub fn with_sign_in(result: ProviderResult<ProviderSession>) -> Self {
            let fake = Self::new();
            *fake.sign_in_result.lock().unwrap() = Some(result);
            fake
        }
    }

    impl IdentityProvider for FakeProvider {
        async fn create_user(&self, registration: &Registration) -> ProviderResult<Identity> {
            self.created.lock().unwrap().push(registration.clone());
            if let Some(result) = self.create_result.lock().unwrap().take() {
                return result;
            }
            Ok(Identity::new(json!({
                "id": "8d0fd0c5-3b1f-4c4e-9d8e-1f6f1f0a2b3c",
                "email": registration.email.as_str(),
                "user_metadata": serde_json::to_value(registration.metadata()).unwrap(),
            })))
        }

        async fn sign_in_with_password(
            &self,
            email: &Email,
            password: &Password,
        ) -> ProviderResult<ProviderSession> {
            self.sign_ins
                .lock()
                .unwrap()
                .push((email.to_string(), password.expose().to_string()));
            self.sign_in_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| {
                    Err(ProviderError::Rejected {
                        status: 400,
                        message: "Invalid login credentials".to_string(),
                    })
                })
        }
    }

    fn john_doe() -> SignUpInput {
        SignUpInput {
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("john@example.com".into()),
            password: Some("secret123".into()),
            confirm_password: None,
            user_type: Some("student".into()),
        }
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let provider = Arc::new(FakeProvider::new());
        let use_case = SignUpUseCase::new(provider.clone());

        let output = use_case.execute(john_doe()).await.unwrap();

        assert_eq!(output.name, "John Doe");
        assert_eq!(output.user_type, "student");
        assert_eq!(output.email, "john@example.com");
        assert!(!output.id.is_empty());

        let created = provider.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].metadata().first_name, "John");
        assert_eq!(created[0].password.expose(), "secret123");
    }

    #[tokio::test]
    async fn test_missing_or_blank_fields() {
        let cases: [fn(&mut SignUpInput); 6] = [
            |i: &mut SignUpInput| i.first_name = None,
            |i: &mut SignUpInput| i.last_name = Some("   ".into()),
            |i: &mut SignUpInput| i.email = None,
            |i: &mut SignUpInput| i.password = Some(String::new()),
            |i: &mut SignUpInput| i.user_type = None,
            |i: &mut SignUpInput| i.user_type = Some("".into()),
        ];

        for mutate in cases {
            let provider = Arc::new(FakeProvider::new());
            let mut input = john_doe();
            mutate(&mut input);

            let err = SignUpUseCase::new(provider.clone())
                .execute(input)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::MissingSignUpFields), "{err:?}");
            assert!(provider.created.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_invalid_user_type() {
        let provider = Arc::new(FakeProvider::new());
        let input = SignUpInput {
            user_type: Some("parent".into()),
            ..john_doe()
        };

        let err = SignUpUseCase::new(provider.clone())
            .execute(input)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid user type. Must be student or college."
        );
        assert!(provider.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_password_checked_when_present() {
        let provider = Arc::new(FakeProvider::new());
        let input = SignUpInput {
            confirm_password: Some("secret124".into()),
            ..john_doe()
        };
        let err = SignUpUseCase::new(provider.clone())
            .execute(input)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));

        let input = SignUpInput {
            confirm_password: Some("secret123".into()),
            ..john_doe()
        };
        assert!(SignUpUseCase::new(provider).execute(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_provider_rejection_is_bad_request() {
        let provider = Arc::new(FakeProvider::failing_create(ProviderError::Rejected {
            status: 422,
            message: "A user with this email address has already been registered".into(),
        }));

        let err = SignUpUseCase::new(provider)
            .execute(john_doe())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("already been registered"));
    }

    #[tokio::test]
    async fn test_identity_without_id_is_internal() {
        let provider = Arc::new(FakeProvider::new());
        *provider.create_result.lock().unwrap() =
            Some(Ok(Identity::new(json!({ "email": "john@example.com" }))));

        let err = SignUpUseCase::new(provider)
            .execute(john_doe())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_output_falls_back_to_registration() {
        let provider = Arc::new(FakeProvider::new());
        *provider.create_result.lock().unwrap() = Some(Ok(Identity::new(json!({ "id": "u-1" }))));

        let output = SignUpUseCase::new(provider)
            .execute(john_doe())
            .await
            .unwrap();
        assert_eq!(
            output,
            SignUpOutput {
                id: "u-1".into(),
                email: "john@example.com".into(),
                name: "John Doe".into(),
                user_type: "student".into(),
            }
        );
    }
}
