//! Input context for determining which commands are available.

use crate::app::App;

/// Which surface receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    List,
    Drawer,
}

/// The modal dialog currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Content feedback dialog
    Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub focus: Focus,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new(focus: Focus, modal: ModalType) -> Self {
        Self { focus, modal }
    }

    /// Snapshot the parts of `app` that affect key dispatch.
    pub fn from_app(app: &App) -> Self {
        let focus = if app.host.is_open() {
            Focus::Drawer
        } else {
            Focus::List
        };
        let modal = if app.feedback.is_some() {
            ModalType::Feedback
        } else {
            ModalType::None
        };
        Self { focus, modal }
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}
