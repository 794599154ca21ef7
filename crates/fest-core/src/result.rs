//! Application result alias.

use crate::error::AppError;

/// Convenience alias used by all Fest crates.
pub type AppResult<T> = Result<T, AppError>;
