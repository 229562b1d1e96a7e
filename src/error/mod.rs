//! Error handling for the drawer subsystem.
//!
//! Almost nothing in the navigation core can fail: unknown content types
//! render empty, backing out of an empty history closes the drawer and a
//! stale scroll restore is dropped. What remains are persistence and
//! terminal failures, collected in [`DrawerError`].
//!
//! | Variant | Recoverable | Typical source |
//! |---------|-------------|----------------|
//! | Io | Yes | view-state file read/write |
//! | Serialization | Yes | corrupt view-state file |
//! | NoHomeDirectory | Yes | state dir resolution |
//! | Terminal | No | raw mode / alternate screen |

mod drawer_error;
mod result;

pub use drawer_error::DrawerError;
pub use result::DrawerResult;
