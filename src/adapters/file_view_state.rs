//! File-backed view-state store.
//!
//! All slots live in one JSON document, by default
//! `~/.guide-drawer/view_state.json`:
//!
//! ```json
//! { "prev-drawer-metadata:feat": { "scrollTop": 12, "openedDict": {} } }
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{DrawerError, DrawerResult};
use crate::traits::ViewStateStore;
use crate::view_state::PersistedViewState;

/// The view-state file name.
pub const VIEW_STATE_FILE: &str = "view_state.json";

/// JSON file store with a write-through in-memory copy.
#[derive(Debug)]
pub struct FileViewStateStore {
    path: PathBuf,
    slots: BTreeMap<String, PersistedViewState>,
}

impl FileViewStateStore {
    /// Open the store in `state_dir`, reading whatever is already there.
    pub fn open(state_dir: impl AsRef<Path>) -> Self {
        let path = state_dir.as_ref().join(VIEW_STATE_FILE);
        let slots = read_slots(&path);
        Self { path, slots }
    }

    /// Get the path to the view-state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> DrawerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| DrawerError::io("create state dir", parent, e))?;
            }
        }

        // Write beside the target and rename so a crash never leaves a
        // truncated document behind.
        let tmp = self.path.with_extension("json.tmp");
        let file = File::create(&tmp).map_err(|e| DrawerError::io("create", &tmp, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.slots)?;
        writer
            .flush()
            .map_err(|e| DrawerError::io("write", &tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| DrawerError::io("rename", &self.path, e))
    }
}

fn read_slots(path: &Path) -> BTreeMap<String, PersistedViewState> {
    if !path.exists() {
        return BTreeMap::new();
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "view state unreadable");
            return BTreeMap::new();
        }
    };

    let raw: BTreeMap<String, Value> = match serde_json::from_reader(BufReader::new(file)) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "view state corrupt, starting fresh");
            return BTreeMap::new();
        }
    };

    // A bad record only costs its own slot.
    raw.into_iter()
        .filter_map(|(slot, value)| match serde_json::from_value(value) {
            Ok(state) => Some((slot, state)),
            Err(e) => {
                tracing::warn!(slot, error = %e, "view state record dropped");
                None
            }
        })
        .collect()
}

impl ViewStateStore for FileViewStateStore {
    fn load(&self, slot: &str) -> PersistedViewState {
        self.slots.get(slot).cloned().unwrap_or_default()
    }

    fn save(&mut self, slot: &str, state: &PersistedViewState) -> DrawerResult<()> {
        if self.slots.get(slot) == Some(state) {
            return Ok(());
        }
        self.slots.insert(slot.to_string(), state.clone());
        self.flush()
    }

    fn clear(&mut self) -> DrawerResult<()> {
        self.slots.clear();
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| DrawerError::io("remove", &self.path, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(scroll_top: u16) -> PersistedViewState {
        let mut state = PersistedViewState::default();
        state.scroll_top = scroll_top;
        state.opened_dict.insert("features".into(), "1".into());
        state
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = FileViewStateStore::open(dir.path());
        assert_eq!(store.load("anything"), PersistedViewState::default());
    }

    #[test]
    fn test_save_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let mut store = FileViewStateStore::open(dir.path());
        store.save("prev-drawer-metadata", &sample(17)).unwrap();

        let reopened = FileViewStateStore::open(dir.path());
        assert_eq!(reopened.load("prev-drawer-metadata"), sample(17));
        assert!(!dir.path().join("view_state.json.tmp").exists());
    }

    #[test]
    fn test_creates_missing_state_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileViewStateStore::open(&nested);
        store.save("slot", &sample(3)).unwrap();
        assert!(nested.join(VIEW_STATE_FILE).exists());
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VIEW_STATE_FILE), "{ not json").unwrap();
        let store = FileViewStateStore::open(dir.path());
        assert_eq!(store.load("slot"), PersistedViewState::default());
    }

    #[test]
    fn test_bad_record_only_drops_its_slot() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(VIEW_STATE_FILE),
            r#"{
                "fractional": {"scrollTop": 12.7, "openedDict": {}},
                "broken": {"scrollTop": "x"},
                "kept": {"scrollTop": 5, "openedDict": {"features": "1"}}
            }"#,
        )
        .unwrap();

        let store = FileViewStateStore::open(dir.path());
        assert_eq!(store.load("fractional").scroll_top, 12);
        assert_eq!(store.load("broken"), PersistedViewState::default());
        assert_eq!(store.load("kept"), sample(5));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileViewStateStore::open(dir.path());
        store.save("slot", &sample(5)).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load("slot"), PersistedViewState::default());
    }
}
