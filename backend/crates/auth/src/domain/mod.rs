//! Domain Layer
//!
//! Value objects, the sign-up registration, and the identity provider gateway trait.

pub mod gateway;
pub mod registration;
pub mod value_object;

// Re-exports
pub use gateway::{IdentityProvider, ProviderError, ProviderResult, ProviderSession};
pub use registration::Registration;
