//! Content-type registry.
//!
//! Maps each [`ContentType`] to a title renderer and a body renderer. The
//! application fills it once at startup; the drawer host only ever looks
//! things up. Adding a content type is a registry entry, never a change
//! to the state machine.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ratatui::text::Line;
use serde_json::Value;

use super::body::RenderedBody;
use super::content_type::ContentType;
use crate::view_state::OpenedSections;

/// Renders a drawer's title from its opaque payload.
pub trait TitleRenderer: Send + Sync {
    fn render_title(&self, data: &Value) -> Vec<Line<'static>>;
}

/// Renders a drawer's body from its opaque payload.
///
/// `opened` is the current section-expansion dictionary so the renderer
/// can show expanded sections expanded.
pub trait BodyRenderer: Send + Sync {
    fn render_body(&self, data: &Value, opened: &OpenedSections) -> RenderedBody;
}

impl<F> TitleRenderer for F
where
    F: Fn(&Value) -> Vec<Line<'static>> + Send + Sync,
{
    fn render_title(&self, data: &Value) -> Vec<Line<'static>> {
        self(data)
    }
}

impl<F> BodyRenderer for F
where
    F: Fn(&Value, &OpenedSections) -> RenderedBody + Send + Sync,
{
    fn render_body(&self, data: &Value, opened: &OpenedSections) -> RenderedBody {
        self(data, opened)
    }
}

#[derive(Clone)]
struct RendererPair {
    title: Arc<dyn TitleRenderer>,
    body: Arc<dyn BodyRenderer>,
}

/// Lookup table from content type to renderer pair.
#[derive(Clone, Default)]
pub struct ContentTypeRegistry {
    entries: HashMap<ContentType, RendererPair>,
}

impl fmt::Debug for ContentTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.entries.keys().map(ContentType::tag).collect();
        kinds.sort_unstable();
        f.debug_struct("ContentTypeRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

impl ContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `kind` to a renderer pair, replacing any previous binding.
    pub fn register<T, B>(&mut self, kind: ContentType, title: T, body: B) -> &mut Self
    where
        T: TitleRenderer + 'static,
        B: BodyRenderer + 'static,
    {
        self.entries.insert(
            kind,
            RendererPair {
                title: Arc::new(title),
                body: Arc::new(body),
            },
        );
        self
    }

    /// Make `kind` render with the pair already bound to `target`.
    ///
    /// Does nothing if `target` has no binding.
    pub fn alias(&mut self, kind: ContentType, target: &ContentType) -> &mut Self {
        if let Some(pair) = self.entries.get(target).cloned() {
            self.entries.insert(kind, pair);
        } else {
            tracing::warn!(kind = %kind, target = %target, "alias target not registered");
        }
        self
    }

    pub fn resolve_title(&self, kind: &ContentType) -> Option<&dyn TitleRenderer> {
        self.entries.get(kind).map(|pair| pair.title.as_ref())
    }

    pub fn resolve_body(&self, kind: &ContentType) -> Option<&dyn BodyRenderer> {
        self.entries.get(kind).map(|pair| pair.body.as_ref())
    }

    pub fn contains(&self, kind: &ContentType) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn title(data: &Value) -> Vec<Line<'static>> {
        vec![Line::from(format!("title {}", data))]
    }

    fn body(_data: &Value, _opened: &OpenedSections) -> RenderedBody {
        RenderedBody::from_lines(vec![Line::from("body")])
    }

    #[test]
    fn test_resolves_registered_kind() {
        let mut registry = ContentTypeRegistry::new();
        registry.register(ContentType::Feat, title, body);

        let rendered = registry
            .resolve_title(&ContentType::Feat)
            .unwrap()
            .render_title(&json!(7));
        assert_eq!(rendered, vec![Line::from("title 7")]);
        assert!(registry.resolve_body(&ContentType::Feat).is_some());
    }

    #[test]
    fn test_unknown_kind_resolves_to_none() {
        let mut registry = ContentTypeRegistry::new();
        registry.register(ContentType::Feat, title, body);
        let unknown = ContentType::from_tag("vehicle");
        assert!(registry.resolve_title(&unknown).is_none());
        assert!(registry.resolve_body(&unknown).is_none());
        assert!(registry.resolve_title(&ContentType::Spell).is_none());
    }

    #[test]
    fn test_alias_shares_renderers() {
        let mut registry = ContentTypeRegistry::new();
        registry
            .register(ContentType::Action, title, body)
            .alias(ContentType::Heritage, &ContentType::Action)
            .alias(ContentType::Sense, &ContentType::Spell);

        assert!(registry.contains(&ContentType::Heritage));
        assert!(!registry.contains(&ContentType::Sense));
        assert_eq!(registry.len(), 2);
    }
}
