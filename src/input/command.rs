//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

use crate::drawer::DrawerCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,

    // =========================================================================
    // Catalog List
    // =========================================================================
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Open a fresh drawer for the selected entry (Enter)
    OpenSelected,

    // =========================================================================
    // Drawer
    // =========================================================================
    /// Forwarded to the drawer host
    Drawer(DrawerCommand),

    // =========================================================================
    // Feedback Dialog
    // =========================================================================
    /// File the pending content report
    SubmitFeedback,
    /// Close the feedback dialog without filing
    DismissFeedback,
}
