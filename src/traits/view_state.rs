//! View-state store trait abstraction.
//!
//! The drawer host reads a record when a drawer becomes active and writes
//! it back on scroll, section changes and navigation. Both directions are
//! synchronous from the host's point of view.

use crate::error::DrawerResult;
use crate::view_state::PersistedViewState;

/// Durable slot-addressed storage for [`PersistedViewState`].
///
/// Loading never fails: a missing or unreadable record is the default
/// record. Saving reports failures, which callers log and otherwise
/// ignore since a lost scroll offset is cosmetic.
///
/// # Example
///
/// ```ignore
/// use guide_drawer::adapters::mock::InMemoryViewState;
/// use guide_drawer::traits::ViewStateStore;
///
/// let mut store = InMemoryViewState::new();
/// let mut state = store.load("prev-drawer-metadata");
/// state.scroll_top = 12;
/// store.save("prev-drawer-metadata", &state)?;
/// ```
pub trait ViewStateStore: Send {
    /// Read the record stored under `slot`.
    fn load(&self, slot: &str) -> PersistedViewState;

    /// Replace the record stored under `slot`.
    fn save(&mut self, slot: &str, state: &PersistedViewState) -> DrawerResult<()>;

    /// Forget every stored record.
    fn clear(&mut self) -> DrawerResult<()>;
}
