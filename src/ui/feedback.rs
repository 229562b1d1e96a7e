//! Content feedback dialog.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::drawer::FeedbackRequest;

pub fn render_feedback_dialog(frame: &mut Frame, area: Rect, request: &FeedbackRequest) {
    let ctx = LayoutContext::new(area.width, area.height);
    let config = DialogFrameConfig::new("Report a problem", 6);
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    let dim = Style::default().fg(COLOR_DIM);
    let lines = vec![
        Line::from(Span::styled(
            format!("Something wrong with this {}?", request.kind),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::default(),
        Line::from(Span::styled(format!("type  {}", request.content_type), dim)),
        Line::from(Span::styled(format!("data  {}", request.data), dim)),
        Line::default(),
        Line::from(Span::styled("⏎ send  esc cancel", dim)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
