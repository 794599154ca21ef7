//! # fest-auth
//!
//! Credential handling for the Fest Platform: Argon2id password hashing
//! and HS256 JWT issuance/validation.

pub mod jwt;
pub mod password;
