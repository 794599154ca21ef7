//! Admin authentication and account setup.

pub mod service;

pub use service::{AuthService, LoginOutcome, SetupRequest};
