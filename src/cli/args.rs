//! Command-line argument parsing.

use crate::config::DrawerConfig;
use crate::view_state::ViewStateScope;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Delete persisted drawer view state
    ResetViewState,
    /// Run the TUI application (default)
    RunTui,
}

/// Command plus the flags that tweak configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub command: CliCommand,
    /// `--shared-view-state`: one view-state slot for every drawer
    pub shared_view_state: bool,
}

impl ParsedArgs {
    /// Fold flag overrides into `config`.
    pub fn apply(&self, config: DrawerConfig) -> DrawerConfig {
        if self.shared_view_state {
            config.with_view_state_scope(ViewStateScope::Shared)
        } else {
            config
        }
    }
}

/// Parse command-line arguments.
///
/// # Examples
///
/// ```
/// use guide_drawer::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["guide-drawer".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> ParsedArgs
where
    I: Iterator<Item = String>,
{
    let mut parsed = ParsedArgs {
        command: CliCommand::RunTui,
        shared_view_state: false,
    };
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return ParsedArgs {
                command: CliCommand::Version,
                ..parsed
            },
            "--reset-view-state" => parsed.command = CliCommand::ResetViewState,
            "--shared-view-state" => parsed.shared_view_state = true,
            _ => {}
        }
    }
    parsed
}
