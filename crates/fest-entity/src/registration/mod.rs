//! Registration entity.

pub mod model;
pub mod status;

pub use model::{CreateRegistration, Registration, RegistrationSummary};
pub use status::PaymentStatus;
