//! Pass entity.

pub mod model;

pub use model::{CreatePass, Pass, UpdatePass};
