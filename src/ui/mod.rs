//! UI rendering.
//!
//! The catalog list fills the screen; an open drawer overlays its right
//! side and the feedback dialog sits on top of both.

mod catalog_list;
pub mod components;
mod drawer;
mod feedback;
pub mod layout;
pub mod theme;

pub use catalog_list::render_catalog_list;
pub use drawer::render_drawer;
pub use feedback::render_feedback_dialog;
pub use layout::LayoutContext;

use ratatui::Frame;

use crate::app::App;

/// Draw one frame. Returns true when another frame is needed right away.
pub fn render(frame: &mut Frame, app: &mut App) -> bool {
    let area = frame.area();
    render_catalog_list(frame, area, app);
    let again = render_drawer(frame, area, &mut app.host);
    if let Some(request) = &app.feedback {
        render_feedback_dialog(frame, area, request);
    }
    again
}
