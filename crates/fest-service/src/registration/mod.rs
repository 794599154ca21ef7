//! Participant enrollment flow.

pub mod service;

pub use service::{EnrollmentRequest, RegistrationDetail, RegistrationService};
