//! Rules content shown in drawers.

mod catalog;
mod renderers;

use std::sync::Arc;

pub use catalog::{Catalog, CatalogEntry, CatalogSection};
pub use renderers::{generic_body, generic_title, link_style, section_style, EntryRenderer};

use crate::drawer::{ContentType, ContentTypeRegistry};

/// Content types backed by catalog entries.
const CATALOG_KINDS: [ContentType; 10] = [
    ContentType::Feat,
    ContentType::Action,
    ContentType::Spell,
    ContentType::Item,
    ContentType::Class,
    ContentType::ClassFeature,
    ContentType::Ancestry,
    ContentType::Background,
    ContentType::Language,
    ContentType::Trait,
];

/// Ability blocks drawn with the action renderers.
const ACTION_ALIASES: [ContentType; 3] = [
    ContentType::Heritage,
    ContentType::Sense,
    ContentType::PhysicalFeature,
];

/// Build the registry used by the application.
pub fn build_registry(catalog: Arc<Catalog>) -> ContentTypeRegistry {
    let mut registry = ContentTypeRegistry::new();
    registry.register(ContentType::Generic, generic_title, generic_body);

    for kind in CATALOG_KINDS {
        let renderer = EntryRenderer::new(Arc::clone(&catalog), kind.clone());
        registry.register(kind, renderer.clone(), renderer);
    }
    for kind in ACTION_ALIASES {
        registry.alias(kind, &ContentType::Action);
    }

    tracing::debug!(kinds = registry.len(), "content registry built");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::OpenedSections;
    use serde_json::json;

    #[test]
    fn test_registry_covers_catalog_kinds() {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        let registry = build_registry(Arc::clone(&catalog));
        for entry in catalog.entries() {
            assert!(registry.contains(&entry.kind), "{} not registered", entry.kind);
        }
        assert!(registry.contains(&ContentType::Generic));
        assert!(!registry.contains(&ContentType::Character));
    }

    #[test]
    fn test_heritage_renders_through_action_alias() {
        let registry = build_registry(Arc::new(Catalog::bundled().unwrap()));
        let title = registry
            .resolve_title(&ContentType::Heritage)
            .unwrap()
            .render_title(&json!({"id": 8}));
        assert_eq!(title[0].spans[0].content, "Rock Dwarf");
        let body = registry
            .resolve_body(&ContentType::Sense)
            .unwrap()
            .render_body(&json!({"id": 10}), &OpenedSections::new());
        assert!(!body.is_empty());
    }
}
