//! Shared Kernel - Vocabulary shared by the EcoRoot server and client
//!
//! This crate contains the small core both sides agree on:
//! - Common error types and result aliases
//! - The account type enumeration
//! - The opaque identity payload and its read-only accessors
//! - Field validation rules applied on both sides of the wire
//!
//! **Design Principle**: Only include things whose meaning must not drift
//! between the forms and the endpoint handler.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod account_type;
pub mod identity;
pub mod validation;

pub use account_type::AccountType;
pub use identity::Identity;
