//! Repository implementations, one per aggregate.

pub mod admin;
pub mod content;
pub mod event;
pub mod pass;
pub mod registration;
