//! Trait abstractions for dependency injection and testability.
//!
//! - [`ViewStateStore`] - Persistence for drawer scroll and section state

pub mod view_state;

pub use view_state::ViewStateStore;
