//! Mock implementations for testing, with no file system access.

pub mod view_state;

pub use view_state::InMemoryViewState;
