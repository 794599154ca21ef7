//! Route handlers organized by domain.

pub mod auth;
pub mod content;
pub mod event;
pub mod health;
pub mod pass;
pub mod registration;
