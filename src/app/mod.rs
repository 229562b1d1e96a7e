//! Application state for the TUI.
//!
//! [`App`] holds the catalog list, the drawer host and the feedback
//! dialog. Key handling lives in [`handlers`].

mod handlers;

use std::sync::Arc;

use crate::config::DrawerConfig;
use crate::content::{build_registry, Catalog, CatalogEntry};
use crate::drawer::{FeedbackRequest, PanelHost, PanelStack};
use crate::traits::ViewStateStore;

/// Selection and scroll position of the catalog list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogListState {
    pub selected_index: usize,
    pub scroll_offset: usize,
}

pub struct App {
    pub catalog: Arc<Catalog>,
    pub list: CatalogListState,
    pub host: PanelHost,
    /// Content report waiting for confirmation
    pub feedback: Option<FeedbackRequest>,
    /// One-line message shown under the list
    pub status: Option<String>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    /// Rows scrolled per mouse wheel step
    pub scroll_lines: u16,
}

impl App {
    pub fn new(
        catalog: Arc<Catalog>,
        stack: PanelStack,
        store: Box<dyn ViewStateStore>,
        config: &DrawerConfig,
    ) -> Self {
        let registry = Arc::new(build_registry(Arc::clone(&catalog)));
        let host = PanelHost::new(stack, registry, store, config);
        Self {
            catalog,
            list: CatalogListState::default(),
            host,
            feedback: None,
            status: None,
            should_quit: false,
            needs_redraw: true,
            scroll_lines: config.scroll_lines,
        }
    }

    /// The stack any part of the app can open drawers through.
    pub fn stack(&self) -> &PanelStack {
        self.host.stack()
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.catalog.entries().get(self.list.selected_index)
    }

    /// Catch the host up with stack changes made elsewhere.
    pub fn on_stack_changed(&mut self) {
        if self.host.sync() {
            self.needs_redraw = true;
        }
    }

    /// Keep the selection inside a list `visible` rows tall.
    pub fn clamp_list_scroll(&mut self, visible: usize) {
        let visible = visible.max(1);
        let selected = self.list.selected_index;
        if selected < self.list.scroll_offset {
            self.list.scroll_offset = selected;
        } else if selected >= self.list.scroll_offset + visible {
            self.list.scroll_offset = selected + 1 - visible;
        }
    }
}
