//! Tracing setup.
//!
//! The terminal belongs to the TUI, so logs only go to a daily-rotated
//! file in the state directory (`logs/guide-drawer.log`). The filter
//! comes from [`DrawerConfig::log_filter`].

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::DrawerConfig;
use crate::error::{DrawerError, DrawerResult};

const LOG_FILE_PREFIX: &str = "guide-drawer.log";

/// Directory log files are written to.
pub fn logs_dir(config: &DrawerConfig) -> DrawerResult<PathBuf> {
    Ok(config.resolve_state_dir()?.join("logs"))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped; keep it
/// alive for the life of the program.
pub fn init(config: &DrawerConfig) -> DrawerResult<WorkerGuard> {
    let dir = logs_dir(config)?;
    std::fs::create_dir_all(&dir).map_err(|e| DrawerError::io("create logs dir", &dir, e))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    Ok(guard)
}
