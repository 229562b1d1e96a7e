//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::{Focus, ModalType};
use crate::drawer::DrawerCommand;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active, even under a modal
    pub global: HashMap<KeyCombo, Command>,
    /// Per modal; a modal swallows every other binding
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Per focused surface
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            focus: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_list_bindings();
        config.setup_drawer_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_modal_bindings(&mut self) {
        let mut feedback = HashMap::new();
        feedback.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitFeedback);
        feedback.insert(KeyCombo::plain(KeyCode::Esc), Command::DismissFeedback);
        self.modal.insert(ModalType::Feedback, feedback);
    }

    fn setup_list_bindings(&mut self) {
        let mut list = HashMap::new();
        list.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected);
        list.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.focus.insert(Focus::List, list);
    }

    fn setup_drawer_bindings(&mut self) {
        use DrawerCommand::*;

        let bindings = [
            (KeyCombo::plain(KeyCode::Esc), Close),
            (KeyCombo::plain(KeyCode::Backspace), Back),
            (KeyCombo::plain(KeyCode::Left), Back),
            (KeyCombo::plain(KeyCode::Up), ScrollUp(1)),
            (KeyCombo::plain(KeyCode::Char('k')), ScrollUp(1)),
            (KeyCombo::plain(KeyCode::Down), ScrollDown(1)),
            (KeyCombo::plain(KeyCode::Char('j')), ScrollDown(1)),
            (KeyCombo::plain(KeyCode::PageUp), PageUp),
            (KeyCombo::plain(KeyCode::PageDown), PageDown),
            (KeyCombo::plain(KeyCode::Home), ScrollTop),
            (KeyCombo::plain(KeyCode::Char('g')), ScrollTop),
            (KeyCombo::plain(KeyCode::Tab), NextLink),
            // Terminals disagree on whether BackTab carries SHIFT.
            (KeyCombo::plain(KeyCode::BackTab), PrevLink),
            (KeyCombo::shift(KeyCode::BackTab), PrevLink),
            (KeyCombo::plain(KeyCode::Enter), FollowLink),
            (KeyCombo::plain(KeyCode::Char('n')), NextSection),
            (KeyCombo::plain(KeyCode::Char('p')), PrevSection),
            (KeyCombo::plain(KeyCode::Char(' ')), ToggleSection),
            (KeyCombo::plain(KeyCode::Char('r')), ReportProblem),
            (KeyCombo::plain(KeyCode::Char('?')), ReportProblem),
            (KeyCombo::shift(KeyCode::Char('?')), ReportProblem),
        ];

        let mut drawer: HashMap<KeyCombo, Command> = bindings
            .into_iter()
            .map(|(combo, cmd)| (combo, Command::Drawer(cmd)))
            .collect();
        drawer.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.focus.insert(Focus::Drawer, drawer);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal)?.get(combo)
    }

    pub fn get_focus(&self, focus: Focus, combo: &KeyCombo) -> Option<&Command> {
        self.focus.get(&focus)?.get(combo)
    }
}
