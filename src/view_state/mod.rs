//! Persisted drawer view state.
//!
//! The drawer remembers where the user was: the last scroll offset and
//! which sub-sections were expanded. This module defines that record and
//! how records are assigned to storage slots; the storage itself sits
//! behind [`crate::traits::ViewStateStore`].

mod persisted;
mod scope;

pub use persisted::{OpenedSections, PersistedViewState};
pub use scope::{ViewStateScope, SHARED_SLOT};
