//! Contextual drawer navigation.
//!
//! Any part of the UI can open a typed detail drawer through a
//! [`PanelStack`]. The stack holds at most one open drawer plus the back
//! history that led to it; the [`PanelHost`] renders whatever is on top,
//! using renderers looked up in the [`ContentTypeRegistry`], and carries
//! scroll and section state across drawers and sessions.
//!
//! ```ignore
//! use guide_drawer::drawer::{PanelRequest, PanelStack};
//! use serde_json::json;
//!
//! let stack = PanelStack::new();
//! stack.open(PanelRequest::new("feat", json!({ "id": 7 })));
//! ```

mod body;
mod content_link;
mod content_type;
mod feedback;
mod host;
mod registry;
mod request;
mod restore;
mod stack;
mod viewport;
mod wrap;

pub use body::{PanelLink, RenderedBody, SectionAnchor};
pub use content_link::{render_text_with_links, ContentLink};
pub use content_type::ContentType;
pub use feedback::{shows_report_problem, FeedbackRequest};
pub use host::{
    Affordances, DrawerCommand, DrawerLayout, HostOutcome, HostState, NavAffordance, PanelHost,
};
pub use registry::{BodyRenderer, ContentTypeRegistry, TitleRenderer};
pub use request::PanelRequest;
pub use restore::PendingRestore;
pub use stack::{Navigation, PanelStack, PanelStackState, StackSnapshot};
pub use viewport::{ScrollViewport, TitleMeasure, DRAWER_CHROME_HEIGHT, FALLBACK_TITLE_HEIGHT};
pub use wrap::{wrap_line, wrap_lines, wrapped_height, WrappedText};
