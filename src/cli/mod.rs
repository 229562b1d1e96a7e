//! Command-line interface.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use guide_drawer::cli::{parse_args, run_cli_command};
//! use guide_drawer::config::DrawerConfig;
//!
//! let parsed = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&parsed.command, &DrawerConfig::from_env()) {
//!     result?;
//!     return Ok(());
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, ParsedArgs};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::adapters::FileViewStateStore;
use crate::config::DrawerConfig;
use crate::traits::ViewStateStore;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand, config: &DrawerConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
        }
        CliCommand::ResetViewState => Some(handle_reset_view_state(config)),
        CliCommand::RunTui => None,
    }
}

/// Delete all persisted drawer view state.
pub fn handle_reset_view_state(config: &DrawerConfig) -> Result<()> {
    let dir = config.resolve_state_dir()?;
    let mut store = FileViewStateStore::open(&dir);
    store.clear()?;
    println!("Cleared drawer view state in {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::PersistedViewState;
    use tempfile::TempDir;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui, &DrawerConfig::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_reset_view_state_clears_store() {
        let dir = TempDir::new().unwrap();
        let mut store = FileViewStateStore::open(dir.path());
        store
            .save("slot", &PersistedViewState::new(4, Default::default()))
            .unwrap();

        let config = DrawerConfig::new().with_state_dir(dir.path());
        let result = run_cli_command(&CliCommand::ResetViewState, &config).unwrap();
        assert!(result.is_ok());
        assert!(!store.path().exists());
    }
}
