//! Admin account entity.

pub mod model;
pub mod role;

pub use model::{Admin, CreateAdmin};
pub use role::AdminRole;
