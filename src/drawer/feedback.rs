//! "Report a problem" affordance.
//!
//! Canonical rules content can be wrong, and the drawer offers a way to
//! say so. Drawers over user-authored data (character sheets, stat
//! breakdowns, item adders, inventory editors) do not.

use serde::Serialize;
use serde_json::Value;

use super::content_type::ContentType;
use super::request::PanelRequest;

/// What the feedback dialog needs to file a content report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    /// Coarse content family, e.g. `ability-block` for feats.
    pub content_type: String,
    #[serde(skip)]
    pub kind: ContentType,
    pub data: Value,
}

impl FeedbackRequest {
    /// Build the report for `request`, or `None` if its content is
    /// user-authored.
    pub fn for_request(request: &PanelRequest) -> Option<Self> {
        if !shows_report_problem(Some(request)) {
            return None;
        }
        Some(Self {
            content_type: request.kind.content_family().to_string(),
            kind: request.kind.clone(),
            data: request.data.clone(),
        })
    }
}

/// Whether a drawer showing `request` offers the report affordance. A
/// closed drawer (`None`) never does.
pub fn shows_report_problem(request: Option<&PanelRequest>) -> bool {
    request.is_some_and(|request| !request.kind.is_user_authored())
}
