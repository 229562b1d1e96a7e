//! Drawer rendering.
//!
//! The drawer overlays the right side of the screen: navigation button
//! in the top border, title, divider, scrolled body and a hint footer.
//! The "report a problem" hint sits in the bottom border.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_REPORT};
use crate::content::link_style;
use crate::drawer::{NavAffordance, PanelHost};

/// Draw the drawer, if one is open, over the right side of `area`.
///
/// Returns true when the title measured differently than the height it
/// was laid out with; the caller should draw again.
pub fn render_drawer(frame: &mut Frame, area: Rect, host: &mut PanelHost) -> bool {
    let Some(layout) = host.layout(area) else {
        return false;
    };
    host.after_layout();
    let Some(affordances) = host.affordances() else {
        return false;
    };

    frame.render_widget(Clear, layout.frame);

    let nav = match affordances.nav {
        NavAffordance::Back => " ← back ",
        NavAffordance::Close => " ✕ close ",
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(nav, Style::default().fg(COLOR_ACCENT)));
    if affordances.report_problem {
        block = block.title_bottom(
            Line::from(Span::styled(
                " r report a problem ",
                Style::default().fg(COLOR_REPORT),
            ))
            .right_aligned(),
        );
    }
    frame.render_widget(block, layout.frame);

    frame.render_widget(
        Paragraph::new(host.wrapped_title().lines.clone()),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(layout.divider.width as usize),
            Style::default().fg(COLOR_BORDER),
        ))),
        layout.divider,
    );

    render_body(frame, layout.body, host);
    render_footer(frame, layout.footer, host);

    layout.needs_redraw
}

fn render_body(frame: &mut Frame, area: Rect, host: &PanelHost) {
    let wrapped = host.wrapped_body();
    let viewport = host.viewport();
    let body = host.body();

    let start = viewport.offset() as usize;
    let end = (start + area.height as usize).min(wrapped.lines.len());
    let mut lines: Vec<Line<'static>> = wrapped
        .lines
        .get(start..end)
        .map(<[Line<'static>]>::to_vec)
        .unwrap_or_default();

    let focus = Style::default().add_modifier(Modifier::REVERSED);

    if let Some(anchor) = host.focused_section().and_then(|i| body.sections.get(i)) {
        for row in wrapped.rows_of(anchor.line) {
            if let Some(line) = row.checked_sub(start).and_then(|i| lines.get_mut(i)) {
                *line = std::mem::take(line).patch_style(focus);
            }
        }
    }

    if let Some(link) = host.focused_link().and_then(|i| body.links.get(i)) {
        let style = link_style();
        for row in wrapped.rows_of(link.line) {
            let Some(line) = row.checked_sub(start).and_then(|i| lines.get_mut(i)) else {
                continue;
            };
            for span in line.spans.iter_mut() {
                let text = span.content.trim();
                if span.style == style && !text.is_empty() && link.label.contains(text) {
                    span.style = span.style.patch(focus);
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), area);

    if viewport.max_offset() > 0 && area.height > 0 {
        let mut state = ScrollbarState::new(viewport.max_offset() as usize).position(start);
        // Drawn over the right border.
        let bar = Rect {
            x: area.x + area.width,
            y: area.y,
            width: 1,
            height: area.height,
        };
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Style::default().fg(COLOR_DIM)),
            bar,
            &mut state,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, host: &PanelHost) {
    if area.height == 0 {
        return;
    }
    let dim = Style::default().fg(COLOR_DIM);
    let line = match host.focused_link().and_then(|i| host.body().links.get(i)) {
        Some(link) => Line::from(vec![
            Span::styled("⏎ open ", dim),
            Span::styled(link.label.clone(), link_style()),
        ]),
        None => Line::from(Span::styled(footer_hints(host), dim)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn footer_hints(host: &PanelHost) -> String {
    let mut hints = vec!["esc close"];
    if host.request().is_some_and(|r| r.has_history()) {
        hints.push("⌫ back");
    }
    if !host.body().links.is_empty() {
        hints.push("tab links");
    }
    if !host.body().sections.is_empty() {
        hints.push("n/p sections");
        hints.push("space toggle");
    }
    hints.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryViewState;
    use crate::config::DrawerConfig;
    use crate::content::{build_registry, Catalog};
    use crate::drawer::{DrawerCommand, PanelRequest, PanelStack};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use std::sync::Arc;

    fn host() -> PanelHost {
        let registry = build_registry(Arc::new(Catalog::bundled().unwrap()));
        PanelHost::new(
            PanelStack::new(),
            Arc::new(registry),
            Box::new(InMemoryViewState::new()),
            &DrawerConfig::new().with_drawer_width_percent(50),
        )
    }

    fn draw(terminal: &mut Terminal<TestBackend>, host: &mut PanelHost) -> (bool, String) {
        let mut again = false;
        terminal
            .draw(|f| {
                again = render_drawer(f, f.area(), host);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        (again, text)
    }

    #[test]
    fn test_closed_drawer_draws_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut host = host();
        let (again, text) = draw(&mut terminal, &mut host);
        assert!(!again);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_fresh_drawer_shows_close_and_report() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut host = host();
        host.stack().open(PanelRequest::new("feat", json!({"id": 1})));
        host.sync();

        let (_, text) = draw(&mut terminal, &mut host);
        assert!(text.contains("close"));
        assert!(!text.contains("back"));
        assert!(text.contains("Power Attack"));
        assert!(text.contains("report a problem"));
    }

    #[test]
    fn test_drill_in_shows_back() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut host = host();
        host.stack().open(PanelRequest::new("feat", json!({"id": 1})));
        host.sync();
        draw(&mut terminal, &mut host);

        host.handle(DrawerCommand::NextLink);
        host.handle(DrawerCommand::FollowLink);
        let (_, text) = draw(&mut terminal, &mut host);
        assert!(text.contains("← back"));
        assert!(text.contains("Strike"));
    }

    #[test]
    fn test_two_line_title_redraws_once() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut host = host();
        host.stack().open(PanelRequest::new("feat", json!({"id": 1})));
        host.sync();

        // Laid out with the one-row fallback, measured at two.
        let (again, _) = draw(&mut terminal, &mut host);
        assert!(again);
        let (again, text) = draw(&mut terminal, &mut host);
        assert!(!again);
        assert!(text.contains("FEAT 1"));
    }
}
