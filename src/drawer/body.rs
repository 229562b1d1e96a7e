//! What a body renderer hands back to the host.

use ratatui::text::Line;
use serde_json::Value;

use super::content_type::ContentType;

/// An expandable sub-section of a drawer body.
///
/// `key` groups sections (only one entry per key is expanded at a time)
/// and `id` names the entry. `line` is the header's index into the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub key: String,
    pub id: String,
    pub line: usize,
}

impl SectionAnchor {
    pub fn new(key: impl Into<String>, id: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            line,
        }
    }
}

/// A reference inside a drawer body that opens another drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLink {
    pub label: String,
    pub kind: ContentType,
    pub data: Value,
    pub line: usize,
}

impl PanelLink {
    pub fn new(label: impl Into<String>, kind: impl Into<ContentType>, data: Value, line: usize) -> Self {
        Self {
            label: label.into(),
            kind: kind.into(),
            data,
            line,
        }
    }
}

/// Rendered body lines plus the interactive anchors within them.
#[derive(Debug, Clone, Default)]
pub struct RenderedBody {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionAnchor>,
    pub links: Vec<PanelLink>,
}

impl RenderedBody {
    pub fn from_lines(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of rows the body occupies.
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}
