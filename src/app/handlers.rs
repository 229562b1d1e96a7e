//! Command execution.

use super::App;
use crate::drawer::{DrawerCommand, HostOutcome};
use crate::input::Command;

impl App {
    pub fn execute_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::MoveUp => {
                self.list.selected_index = self.list.selected_index.saturating_sub(1);
            }
            Command::MoveDown => {
                let last = self.catalog.len().saturating_sub(1);
                self.list.selected_index = (self.list.selected_index + 1).min(last);
            }
            Command::OpenSelected => self.open_selected(),
            Command::Drawer(cmd) => self.handle_drawer_command(cmd),
            Command::SubmitFeedback => self.submit_feedback(),
            Command::DismissFeedback => {
                self.feedback = None;
            }
        }
        self.needs_redraw = true;
    }

    fn open_selected(&mut self) {
        let Some(request) = self.selected_entry().map(|e| e.request()) else {
            return;
        };
        self.status = None;
        self.stack().open(request);
        self.host.sync();
    }

    fn handle_drawer_command(&mut self, cmd: DrawerCommand) {
        if let HostOutcome::Feedback(request) = self.host.handle(cmd) {
            self.feedback = Some(request);
        }
    }

    fn submit_feedback(&mut self) {
        let Some(request) = self.feedback.take() else {
            return;
        };
        tracing::info!(
            content_type = %request.content_type,
            data = %request.data,
            "content problem reported"
        );
        self.status = Some(format!("Reported a problem with this {}", request.kind));
    }

    /// Close any open drawer (persisting its view state) and stop.
    fn quit(&mut self) {
        if self.host.is_open() {
            self.host.handle(DrawerCommand::Close);
        }
        self.should_quit = true;
    }
}
