//! Renderers for catalog entries and inline generic content.

use std::sync::Arc;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use serde_json::Value;

use super::catalog::{Catalog, CatalogEntry};
use crate::drawer::{
    render_text_with_links, BodyRenderer, ContentType, PanelLink, RenderedBody, SectionAnchor,
    TitleRenderer,
};
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER, COLOR_LINK, COLOR_SECTION, COLOR_TRAIT};
use crate::view_state::OpenedSections;

/// Renders any catalog entry of one content type.
#[derive(Debug, Clone)]
pub struct EntryRenderer {
    catalog: Arc<Catalog>,
    kind: ContentType,
}

impl EntryRenderer {
    pub fn new(catalog: Arc<Catalog>, kind: ContentType) -> Self {
        Self { catalog, kind }
    }

    fn entry(&self, data: &Value) -> Option<&CatalogEntry> {
        let entry = self.catalog.lookup(&self.kind, data);
        if entry.is_none() {
            tracing::debug!(kind = %self.kind, %data, "no catalog entry for drawer payload");
        }
        entry
    }
}

impl TitleRenderer for EntryRenderer {
    fn render_title(&self, data: &Value) -> Vec<Line<'static>> {
        let Some(entry) = self.entry(data) else {
            return Vec::new();
        };
        let subtitle = match entry.level {
            Some(level) => format!("{} {}", entry.kind.tag().to_uppercase(), level),
            None => entry.kind.tag().to_uppercase(),
        };
        vec![
            Line::from(Span::styled(
                entry.name.clone(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, Style::default().fg(COLOR_DIM))),
        ]
    }
}

impl BodyRenderer for EntryRenderer {
    fn render_body(&self, data: &Value, opened: &OpenedSections) -> RenderedBody {
        let Some(entry) = self.entry(data) else {
            return RenderedBody::default();
        };
        let mut body = RenderedBody::default();

        if !entry.traits.is_empty() {
            let badges: Vec<Span<'static>> = entry
                .traits
                .iter()
                .map(|t| {
                    Span::styled(
                        format!("[{}] ", t.to_uppercase()),
                        Style::default().fg(COLOR_TRAIT),
                    )
                })
                .collect();
            body.lines.push(Line::from(badges));
            body.lines.push(Line::default());
        }

        push_text(&mut body, &entry.description);

        for section in &entry.sections {
            let expanded = opened.get(&section.key) == Some(&section.id);
            let marker = if expanded { "▾" } else { "▸" };
            body.lines.push(Line::default());
            body.sections
                .push(SectionAnchor::new(&section.key, &section.id, body.lines.len()));
            body.lines.push(Line::from(Span::styled(
                format!("{marker} {}", section.heading),
                section_style(),
            )));
            if expanded {
                push_text(&mut body, &section.text);
            }
        }
        body
    }
}

/// Title for an inline `{"title": .., "text": ..}` payload.
pub fn generic_title(data: &Value) -> Vec<Line<'static>> {
    data.get("title")
        .and_then(Value::as_str)
        .map(|title| {
            vec![Line::from(Span::styled(
                title.to_string(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ))]
        })
        .unwrap_or_default()
}

/// Body for an inline `{"title": .., "text": ..}` payload. Paragraphs are
/// separated by blank lines in `text`.
pub fn generic_body(data: &Value, _opened: &OpenedSections) -> RenderedBody {
    let mut body = RenderedBody::default();
    let Some(text) = data.get("text").and_then(Value::as_str) else {
        return body;
    };
    for (i, paragraph) in text.split("\n\n").enumerate() {
        if i > 0 {
            body.lines.push(Line::default());
        }
        push_text(&mut body, paragraph);
    }
    body
}

pub fn link_style() -> Style {
    Style::default()
        .fg(COLOR_LINK)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn section_style() -> Style {
    Style::default()
        .fg(COLOR_SECTION)
        .add_modifier(Modifier::BOLD)
}

/// Append `text` as one body line, registering its links.
fn push_text(body: &mut RenderedBody, text: &str) {
    let line = body.lines.len();
    let mut links = Vec::new();
    let spans = render_text_with_links(text, Style::default(), link_style(), &mut links);
    body.lines.push(Line::from(spans));
    body.links.extend(
        links
            .into_iter()
            .map(|link| PanelLink::new(link.label, link.kind, link.data, line)),
    );
}
