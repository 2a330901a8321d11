//! Result type alias for backplan operations

use crate::Error;

/// Result type alias for backplan operations
pub type Result<T> = std::result::Result<T, Error>;
