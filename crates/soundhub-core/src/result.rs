//! Convenience result type alias for SoundHub.

use crate::error::AppError;

/// A specialized `Result` type for SoundHub operations.
pub type AppResult<T> = Result<T, AppError>;
