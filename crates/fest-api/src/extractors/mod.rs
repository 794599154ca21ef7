//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::AuthAdmin;
pub use pagination::PaginationParams;
