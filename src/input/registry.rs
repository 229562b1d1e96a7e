//! Command registry for dispatching terminal input to commands.
//!
//! Priority: global bindings, then the active modal (which swallows
//! everything else), then bindings for the focused surface.

use crossterm::event::{KeyEvent, KeyEventKind, MouseEventKind};

use super::command::Command;
use super::context::{Focus, InputContext};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::drawer::DrawerCommand;

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(*cmd);
        }
        if context.is_modal_active() {
            return self.config.get_modal(context.modal, &combo).copied();
        }
        self.config.get_focus(context.focus, &combo).copied()
    }

    /// Wheel events scroll an open drawer by `lines`.
    pub fn dispatch_mouse(
        &self,
        kind: MouseEventKind,
        context: &InputContext,
        lines: u16,
    ) -> Option<Command> {
        if context.is_modal_active() || context.focus != Focus::Drawer {
            return None;
        }
        match kind {
            MouseEventKind::ScrollUp => Some(Command::Drawer(DrawerCommand::ScrollUp(lines))),
            MouseEventKind::ScrollDown => Some(Command::Drawer(DrawerCommand::ScrollDown(lines))),
            _ => None,
        }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::context::ModalType;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_focus_selects_bindings() {
        let registry = CommandRegistry::new();
        let enter = make_key_event(KeyCode::Enter, KeyModifiers::NONE);

        let list = InputContext::new(Focus::List, ModalType::None);
        assert_eq!(registry.dispatch(enter, &list), Some(Command::OpenSelected));

        let drawer = InputContext::new(Focus::Drawer, ModalType::None);
        assert_eq!(
            registry.dispatch(enter, &drawer),
            Some(Command::Drawer(DrawerCommand::FollowLink))
        );
    }

    #[test]
    fn test_modal_swallows_focus_bindings() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new(Focus::List, ModalType::Feedback);

        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Esc, KeyModifiers::NONE), &ctx),
            Some(Command::DismissFeedback)
        );
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Char('q'), KeyModifiers::NONE), &ctx),
            None
        );
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL), &ctx),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_release_ignored() {
        let registry = CommandRegistry::new();
        let mut key = make_key_event(KeyCode::Esc, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        let ctx = InputContext::new(Focus::Drawer, ModalType::None);
        assert_eq!(registry.dispatch(key, &ctx), None);
    }

    #[test]
    fn test_mouse_scrolls_only_open_drawer() {
        let registry = CommandRegistry::new();
        let drawer = InputContext::new(Focus::Drawer, ModalType::None);
        assert_eq!(
            registry.dispatch_mouse(MouseEventKind::ScrollDown, &drawer, 3),
            Some(Command::Drawer(DrawerCommand::ScrollDown(3)))
        );
        let list = InputContext::new(Focus::List, ModalType::None);
        assert_eq!(registry.dispatch_mouse(MouseEventKind::ScrollDown, &list, 3), None);
    }
}
