//! Slot assignment for persisted view state.

use crate::drawer::ContentType;

/// Slot used when every drawer shares one record.
pub const SHARED_SLOT: &str = "prev-drawer-metadata";

/// How drawers map onto persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStateScope {
    /// One record for every content type. Moving between types inherits
    /// the previous type's scroll offset until it is overwritten.
    Shared,
    /// One record per content type.
    #[default]
    PerType,
}

impl ViewStateScope {
    /// The storage slot for drawers of `kind`.
    pub fn slot_for(&self, kind: &ContentType) -> String {
        match self {
            ViewStateScope::Shared => SHARED_SLOT.to_string(),
            ViewStateScope::PerType => format!("{}:{}", SHARED_SLOT, kind.tag()),
        }
    }
}
