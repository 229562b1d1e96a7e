//! Content links embedded in rules text.
//!
//! Rules descriptions reference other content inline as
//! `[Grab an Edge](link_action_12)`. The label is shown, the target
//! becomes a drill-in link.

use once_cell::sync::Lazy;
use ratatui::{style::Style, text::Span};
use regex::Regex;
use serde_json::{json, Value};

use super::content_type::ContentType;

/// `[label](link_<tag>_<id>)`
pub(crate) static CONTENT_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(link_([a-z-]+)_(\d+)\)").expect("Invalid content link regex")
});

/// A link found in a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLink {
    pub label: String,
    pub kind: ContentType,
    /// Payload for the target drawer, `{"id": n}`.
    pub data: Value,
}

/// Split `text` into spans with links replaced by their styled labels.
///
/// Links are appended to `links` in order of appearance.
pub fn render_text_with_links(
    text: &str,
    base_style: Style,
    link_style: Style,
    links: &mut Vec<ContentLink>,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for caps in CONTENT_LINK_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let id: u64 = match caps[3].parse() {
            Ok(id) => id,
            Err(_) => continue,
        };
        if whole.start() > last_end {
            spans.push(Span::styled(text[last_end..whole.start()].to_string(), base_style));
        }
        let label = caps[1].to_string();
        spans.push(Span::styled(label.clone(), link_style));
        links.push(ContentLink {
            label,
            kind: ContentType::from_tag(&caps[2]),
            data: json!({ "id": id }),
        });
        last_end = whole.end();
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
    spans
}
