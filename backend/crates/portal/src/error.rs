//! Submit Errors

use thiserror::Error;

use crate::form::FieldErrors;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Why a form submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input failed client-side checks; nothing was sent
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    /// The server refused; the message is what the form shows
    #[error("{0}")]
    Rejected(String),

    #[error("Network error. Please try again.")]
    Network,

    /// A request from this form is already in flight
    #[error("request already in progress")]
    Busy,
}
