//! # fest-entity
//!
//! Domain entities for the Fest Platform: admins, events, passes,
//! registrations, and public site content. All models derive serde and
//! sqlx `FromRow`; enum columns map to Postgres enum types.

pub mod admin;
pub mod content;
pub mod event;
pub mod pass;
pub mod registration;
