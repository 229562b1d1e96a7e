//! Result alias for drawer operations.

use super::drawer_error::DrawerError;

/// Type alias for Results using [`DrawerError`].
pub type DrawerResult<T> = Result<T, DrawerError>;
