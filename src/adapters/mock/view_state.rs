//! In-memory view-state store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{DrawerError, DrawerResult};
use crate::traits::ViewStateStore;
use crate::view_state::PersistedViewState;

/// In-memory view-state store.
///
/// Clones share storage, so a test can hand one clone to the drawer host
/// and inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryViewState {
    slots: Arc<Mutex<HashMap<String, PersistedViewState>>>,
    save_count: Arc<Mutex<usize>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-populated.
    pub fn with_slot(slot: &str, state: PersistedViewState) -> Self {
        let store = Self::new();
        store.slots.lock().unwrap().insert(slot.to_string(), state);
        store
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    /// Peek at a slot without going through the trait.
    pub fn get(&self, slot: &str) -> Option<PersistedViewState> {
        self.slots.lock().unwrap().get(slot).cloned()
    }
}

impl ViewStateStore for InMemoryViewState {
    fn load(&self, slot: &str) -> PersistedViewState {
        self.get(slot).unwrap_or_default()
    }

    fn save(&mut self, slot: &str, state: &PersistedViewState) -> DrawerResult<()> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(DrawerError::io(
                "write",
                slot,
                std::io::Error::new(std::io::ErrorKind::Other, "mock save failure"),
            ));
        }
        self.slots
            .lock()
            .unwrap()
            .insert(slot.to_string(), state.clone());
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }

    fn clear(&mut self) -> DrawerResult<()> {
        self.slots.lock().unwrap().clear();
        Ok(())
    }
}
