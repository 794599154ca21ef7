//! # fest-service
//!
//! Business logic service layer for the Fest Platform. Each service
//! orchestrates repositories and authentication primitives to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod dashboard;
pub mod registration;

pub use auth::AuthService;
pub use dashboard::{DashboardService, DashboardStats};
pub use registration::RegistrationService;
