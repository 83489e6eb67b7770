//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, constant-time comparison)
//! - Client identification from request headers
//! - Bearer credential extraction and matching

pub mod client;
pub mod credential;
pub mod crypto;
