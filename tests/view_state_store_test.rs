//! View state persisted to disk across drawer sessions.
//!
//! Each test builds a host over a `FileViewStateStore` in a temp
//! directory, then builds a second host over a fresh store on the same
//! directory to stand in for the next launch.

mod common;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use common::{test_registry, AREA};
use serde_json::{json, Value};
use tempfile::TempDir;

use guide_drawer::adapters::file_view_state::VIEW_STATE_FILE;
use guide_drawer::adapters::FileViewStateStore;
use guide_drawer::config::DrawerConfig;
use guide_drawer::drawer::{DrawerCommand, PanelHost, PanelRequest, PanelStack};
use guide_drawer::traits::ViewStateStore;
use guide_drawer::view_state::{PersistedViewState, ViewStateScope, SHARED_SLOT};

fn session(dir: &Path, scope: ViewStateScope) -> (PanelStack, PanelHost) {
    let stack = PanelStack::new();
    let host = PanelHost::new(
        stack.clone(),
        Arc::new(test_registry()),
        Box::new(FileViewStateStore::open(dir)),
        &DrawerConfig::new().with_view_state_scope(scope),
    );
    (stack, host)
}

fn read_document(dir: &Path) -> Value {
    let raw = fs::read_to_string(dir.join(VIEW_STATE_FILE)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_offset_survives_restart() {
    let dir = TempDir::new().unwrap();

    let (stack, mut host) = session(dir.path(), ViewStateScope::PerType);
    stack.open(PanelRequest::new("feat", json!({"id": 7})));
    host.sync();
    host.layout(AREA);
    host.handle(DrawerCommand::ScrollDown(33));
    host.handle(DrawerCommand::Close);
    drop(host);

    let (stack, mut host) = session(dir.path(), ViewStateScope::PerType);
    stack.open(
        PanelRequest::new("action", json!({"id": 9}))
            .with_history(vec![PanelRequest::new("feat", json!({"id": 7}))]),
    );
    host.sync();
    host.handle(DrawerCommand::Back);
    host.layout(AREA);
    assert!(host.after_layout());
    assert_eq!(host.viewport().offset(), 33);
}

#[test]
fn test_document_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();
    let (stack, mut host) = session(dir.path(), ViewStateScope::Shared);
    stack.open(PanelRequest::new("spell", json!({"id": 1})));
    host.sync();
    host.layout(AREA);
    host.handle(DrawerCommand::ScrollDown(4));
    host.handle(DrawerCommand::NextSection);
    host.handle(DrawerCommand::ScrollDown(2));
    host.handle(DrawerCommand::ToggleSection);

    assert_eq!(
        read_document(dir.path()),
        json!({
            SHARED_SLOT: {"scrollTop": 2, "openedDict": {"extra": "1"}}
        })
    );
}

#[test]
fn test_corrupt_document_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(VIEW_STATE_FILE), "[1, 2").unwrap();

    let (stack, mut host) = session(dir.path(), ViewStateScope::PerType);
    stack.open(PanelRequest::new("feat", json!({"id": 7})));
    host.sync();
    assert_eq!(host.opened_sections().map(|o| o.len()), Some(0));

    host.layout(AREA);
    host.handle(DrawerCommand::ScrollDown(6));
    host.handle(DrawerCommand::Close);

    let store = FileViewStateStore::open(dir.path());
    assert_eq!(store.load("prev-drawer-metadata:feat").scroll_top, 6);
}

#[test]
fn test_unchanged_state_is_not_rewritten() {
    let dir = TempDir::new().unwrap();
    let mut store = FileViewStateStore::open(dir.path());
    let state = PersistedViewState::new(3, Default::default());
    store.save("slot", &state).unwrap();

    fs::remove_file(store.path()).unwrap();
    store.save("slot", &state).unwrap();
    assert!(!store.path().exists());

    store
        .save("slot", &PersistedViewState::new(4, Default::default()))
        .unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_clear_forgets_every_slot() {
    let dir = TempDir::new().unwrap();
    let mut store = FileViewStateStore::open(dir.path());
    store
        .save("a", &PersistedViewState::new(1, Default::default()))
        .unwrap();
    store
        .save("b", &PersistedViewState::new(2, Default::default()))
        .unwrap();

    store.clear().unwrap();

    let reopened = FileViewStateStore::open(dir.path());
    assert_eq!(reopened.load("a"), PersistedViewState::default());
    assert_eq!(reopened.load("b"), PersistedViewState::default());
}
