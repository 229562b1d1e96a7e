//! Full-screen catalog list.
//!
//! Follows the same minimal aesthetic as the drawer: a header with the
//! entry count, two rows per entry, and a status line at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::content::CatalogEntry;

/// Lines per item (name + type line)
const LINES_PER_ITEM: usize = 2;

pub fn render_catalog_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacing
            Constraint::Min(2),    // List
            Constraint::Length(1), // Status
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_items(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        "rules",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(title)), area);

    let count = app.catalog.len().to_string();
    let count_width = count.len() as u16;
    if area.width > count_width {
        frame.render_widget(
            Paragraph::new(Span::styled(count, Style::default().fg(COLOR_DIM))),
            Rect::new(area.x + area.width - count_width, area.y, count_width, 1),
        );
    }
}

fn render_items(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.catalog.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("no entries", Style::default().fg(COLOR_DIM))),
            area,
        );
        return;
    }

    let visible_items = area.height as usize / LINES_PER_ITEM;
    app.clamp_list_scroll(visible_items);

    let selected = app.list.selected_index;
    let mut lines = Vec::new();
    for (i, entry) in app
        .catalog
        .entries()
        .iter()
        .enumerate()
        .skip(app.list.scroll_offset)
        .take(visible_items)
    {
        lines.extend(item_lines(entry, i == selected));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Line 1: `> Name`, line 2: `  type level`
fn item_lines(entry: &CatalogEntry, is_selected: bool) -> [Line<'static>; 2] {
    let (marker, name_style) = if is_selected {
        (
            "> ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(COLOR_HEADER))
    };
    let detail = match entry.level {
        Some(level) => format!("  {} {}", entry.kind, level),
        None => format!("  {}", entry.kind),
    };
    [
        Line::from(vec![
            Span::styled(marker, name_style),
            Span::styled(entry.name.clone(), name_style),
        ]),
        Line::from(Span::styled(detail, Style::default().fg(COLOR_DIM))),
    ]
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = app
        .status
        .clone()
        .unwrap_or_else(|| "↑↓ select  ⏎ open  q quit".to_string());
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM))),
        area,
    );
}
