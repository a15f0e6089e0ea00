//! Credential storage and verification.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`credentials`] -- user creation, update and login checks built on top.

pub mod credentials;
pub mod password;
