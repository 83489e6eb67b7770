//! Portal - EcoRoot sign-up / sign-in view model
//!
//! Client side of the auth flow, free of any UI toolkit:
//! - `form/` - sign-up and sign-in form state, reducers and submit controllers
//! - `manager` - which form is showing, and who is signed in
//! - `profile` - what to show once signed in
//! - `api` - HTTP client for the auth endpoints
//!
//! State is a plain value advanced by `reduce(action)`. The async controllers
//! own the state, run validation, call the API and feed the outcome back in.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod manager;
pub mod profile;

pub use api::{AuthApi, HttpAuthApi};
pub use config::PortalConfig;
pub use error::SubmitError;
pub use manager::{AuthManager, AuthManagerState, View};
pub use profile::ProfilePanel;
