//! Concrete implementations of trait abstractions.
//!
//! - [`FileViewStateStore`] - JSON file under the state directory
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryViewState`] - In-memory view-state store

pub mod file_view_state;
pub mod mock;

pub use file_view_state::FileViewStateStore;
pub use mock::InMemoryViewState;
