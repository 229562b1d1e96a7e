//! Common test utilities for integration tests.
//!
//! Provides a registry of simple renderers with predictable geometry and
//! a builder for a drawer host over an in-memory view-state store.

#![allow(dead_code)]

use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui::text::Line;
use serde_json::{json, Value};

use guide_drawer::adapters::mock::InMemoryViewState;
use guide_drawer::config::DrawerConfig;
use guide_drawer::drawer::{
    ContentType, ContentTypeRegistry, PanelHost, PanelLink, PanelStack, RenderedBody,
    SectionAnchor,
};
use guide_drawer::view_state::{OpenedSections, ViewStateScope};

/// Screen used for layout: the drawer gets 45 of 100 columns, a 43 column
/// interior, and a 25 row body under a one row title.
pub const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

/// Body rows visible in [`AREA`] with a one row title.
pub const BODY_ROWS: u16 = 25;

/// Rows in a default test body.
pub const DEFAULT_ROWS: u16 = 100;

/// `data.title` (may contain `\n` for multi-row titles) or `untitled`.
pub fn title(data: &Value) -> Vec<Line<'static>> {
    data.get("title")
        .and_then(Value::as_str)
        .unwrap_or("untitled")
        .split('\n')
        .map(|row| Line::from(row.to_string()))
        .collect()
}

/// `data.rows` short numbered rows (default 100). Row 0 is the header of
/// section `extra:1`, row 1 links to action 9. An expanded section adds
/// one row after the header.
pub fn body(data: &Value, opened: &OpenedSections) -> RenderedBody {
    let rows = data
        .get("rows")
        .and_then(Value::as_u64)
        .unwrap_or(DEFAULT_ROWS as u64) as usize;

    let mut body = RenderedBody::default();
    body.sections.push(SectionAnchor::new("extra", "1", 0));
    body.lines.push(Line::from("section extra"));
    if opened.get("extra").map(String::as_str) == Some("1") {
        body.lines.push(Line::from("extra text"));
    }
    body.links.push(PanelLink::new(
        "see action",
        "action",
        json!({"id": 9}),
        body.lines.len(),
    ));
    while body.lines.len() < rows {
        body.lines.push(Line::from(format!("row {}", body.lines.len())));
    }
    body
}

pub fn test_registry() -> ContentTypeRegistry {
    let mut registry = ContentTypeRegistry::new();
    for kind in [
        ContentType::Feat,
        ContentType::Action,
        ContentType::Spell,
        ContentType::Character,
    ] {
        registry.register(kind, title, body);
    }
    registry
}

pub fn host_with(scope: ViewStateScope, store: InMemoryViewState) -> (PanelStack, PanelHost) {
    let stack = PanelStack::new();
    let host = PanelHost::new(
        stack.clone(),
        Arc::new(test_registry()),
        Box::new(store),
        &DrawerConfig::new().with_view_state_scope(scope),
    );
    (stack, host)
}

pub fn host() -> (PanelStack, PanelHost, InMemoryViewState) {
    let store = InMemoryViewState::new();
    let (stack, host) = host_with(ViewStateScope::PerType, store.clone());
    (stack, host, store)
}
