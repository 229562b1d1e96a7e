//! Runtime configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `GUIDE_DRAWER_STATE_DIR` | where view state and logs live |
//! | `GUIDE_DRAWER_SHARED_VIEW_STATE` | set to use one view-state slot for every drawer |
//! | `GUIDE_DRAWER_WIDTH` | drawer width as a percentage of the screen |
//! | `GUIDE_DRAWER_LOG` | tracing filter, falls back to `RUST_LOG` |

use std::path::PathBuf;

use crate::drawer::FALLBACK_TITLE_HEIGHT;
use crate::error::{DrawerError, DrawerResult};
use crate::view_state::ViewStateScope;

/// The state directory name under the home directory.
const STATE_DIR: &str = ".guide-drawer";

const MIN_WIDTH_PERCENT: u16 = 20;
const MAX_WIDTH_PERCENT: u16 = 100;

/// Configuration for the drawer and the binary around it.
///
/// # Example
///
/// ```ignore
/// use guide_drawer::config::DrawerConfig;
/// use guide_drawer::view_state::ViewStateScope;
///
/// let config = DrawerConfig::default()
///     .with_view_state_scope(ViewStateScope::Shared)
///     .with_drawer_width_percent(60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    /// Directory for view state and logs (default: `~/.guide-drawer`)
    pub state_dir: Option<PathBuf>,
    /// How drawers share persisted view state
    pub view_state_scope: ViewStateScope,
    /// Drawer width as a percentage of the terminal width
    pub drawer_width_percent: u16,
    /// Title rows reserved before the title has been measured
    pub fallback_title_height: u16,
    /// Lines moved by one mouse wheel step
    pub scroll_lines: u16,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            state_dir: None,
            view_state_scope: ViewStateScope::PerType,
            drawer_width_percent: 45,
            fallback_title_height: FALLBACK_TITLE_HEIGHT,
            scroll_lines: 3,
            log_filter: "info".to_string(),
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = Some(dir.into());
        self
    }

    pub fn with_view_state_scope(mut self, scope: ViewStateScope) -> Self {
        self.view_state_scope = scope;
        self
    }

    /// Set the drawer width, clamped to 20..=100 percent.
    pub fn with_drawer_width_percent(mut self, percent: u16) -> Self {
        self.drawer_width_percent = percent.clamp(MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT);
        self
    }

    pub fn with_fallback_title_height(mut self, rows: u16) -> Self {
        self.fallback_title_height = rows.max(1);
        self
    }

    pub fn with_scroll_lines(mut self, lines: u16) -> Self {
        self.scroll_lines = lines.max(1);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Build a config from the `GUIDE_DRAWER_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("GUIDE_DRAWER_STATE_DIR") {
            if !dir.is_empty() {
                config = config.with_state_dir(dir);
            }
        }
        if std::env::var_os("GUIDE_DRAWER_SHARED_VIEW_STATE").is_some() {
            config = config.with_view_state_scope(ViewStateScope::Shared);
        }
        if let Some(percent) = std::env::var("GUIDE_DRAWER_WIDTH")
            .ok()
            .and_then(|v| v.trim().parse::<u16>().ok())
        {
            config = config.with_drawer_width_percent(percent);
        }
        if let Some(filter) = std::env::var("GUIDE_DRAWER_LOG")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
        {
            config = config.with_log_filter(filter);
        }
        config
    }

    /// The state directory, resolving the default under `$HOME`.
    pub fn resolve_state_dir(&self) -> DrawerResult<PathBuf> {
        match &self.state_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(STATE_DIR))
                .ok_or(DrawerError::NoHomeDirectory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "GUIDE_DRAWER_STATE_DIR",
            "GUIDE_DRAWER_SHARED_VIEW_STATE",
            "GUIDE_DRAWER_WIDTH",
            "GUIDE_DRAWER_LOG",
            "RUST_LOG",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = DrawerConfig::default();
        assert_eq!(config.view_state_scope, ViewStateScope::PerType);
        assert_eq!(config.drawer_width_percent, 45);
        assert_eq!(config.fallback_title_height, FALLBACK_TITLE_HEIGHT);
        assert!(config.state_dir.is_none());
    }

    #[test]
    fn test_builder_clamps() {
        let config = DrawerConfig::new()
            .with_drawer_width_percent(5)
            .with_fallback_title_height(0)
            .with_scroll_lines(0);
        assert_eq!(config.drawer_width_percent, 20);
        assert_eq!(config.fallback_title_height, 1);
        assert_eq!(config.scroll_lines, 1);
        assert_eq!(
            DrawerConfig::new().with_drawer_width_percent(300).drawer_width_percent,
            100
        );
    }

    #[test]
    fn test_explicit_state_dir_wins() {
        let config = DrawerConfig::new().with_state_dir("/tmp/drawer-state");
        assert_eq!(
            config.resolve_state_dir().unwrap(),
            PathBuf::from("/tmp/drawer-state")
        );
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        std::env::set_var("GUIDE_DRAWER_STATE_DIR", "/tmp/x");
        std::env::set_var("GUIDE_DRAWER_SHARED_VIEW_STATE", "1");
        std::env::set_var("GUIDE_DRAWER_WIDTH", "60");
        std::env::set_var("GUIDE_DRAWER_LOG", "guide_drawer=debug");

        let config = DrawerConfig::from_env();
        clear_env();

        assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(config.view_state_scope, ViewStateScope::Shared);
        assert_eq!(config.drawer_width_percent, 60);
        assert_eq!(config.log_filter, "guide_drawer=debug");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage_width() {
        clear_env();
        std::env::set_var("GUIDE_DRAWER_WIDTH", "wide");
        let config = DrawerConfig::from_env();
        clear_env();
        assert_eq!(config.drawer_width_percent, 45);
    }
}
