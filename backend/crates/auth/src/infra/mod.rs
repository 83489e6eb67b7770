//! Infrastructure Layer
//!
//! Identity provider client.

pub mod gotrue;

pub use gotrue::GoTrueIdentityProvider;
