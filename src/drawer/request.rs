//! Panel requests: what a drawer shows and how it got there.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::content_type::ContentType;

/// A value describing what to show in the drawer.
///
/// `data` is opaque here; only the type-specific renderer interprets it.
/// `history` is the back stack for this drawer session, oldest first,
/// never including the request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRequest {
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<PanelRequest>,
}

impl PanelRequest {
    /// A fresh request with empty history.
    pub fn new(kind: impl Into<ContentType>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
            history: Vec::new(),
        }
    }

    /// Replace the history wholesale.
    pub fn with_history(mut self, history: Vec<PanelRequest>) -> Self {
        self.history = history;
        self
    }

    /// Build the request for drilling into a reference shown by `self`.
    ///
    /// The child's history is this request's history with this request
    /// (minus its own history) appended.
    pub fn drill_in(&self, kind: impl Into<ContentType>, data: Value) -> PanelRequest {
        let mut history = self.history.clone();
        history.push(self.as_entry());
        PanelRequest::new(kind, data).with_history(history)
    }

    /// This request without its history, as stored inside a back stack.
    pub fn as_entry(&self) -> PanelRequest {
        PanelRequest::new(self.kind.clone(), self.data.clone())
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Split off the most recent history entry.
    ///
    /// Returns the request going back should restore, with its history
    /// truncated to everything before it, or `None` if there is nowhere to
    /// go back to.
    pub fn popped(&self) -> Option<PanelRequest> {
        let mut history = self.history.clone();
        let previous = history.pop()?;
        Some(PanelRequest::new(previous.kind, previous.data).with_history(history))
    }
}
