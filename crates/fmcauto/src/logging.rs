//! Tracing setup: stderr plus an append-only log file.
//!
//! The console follows `--log-level` (or `RUST_LOG`). The file always
//! records at least `info`, so every create request and its result is
//! kept. The file sink is best effort: when it can't be opened the CLI
//! keeps logging to the console and says so once.

use std::path::{Path, PathBuf};

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{CommonOpts, LogLevel};

pub const DEFAULT_LOG_FILE: &str = "/var/log/fmc_automation.log";

/// Log file from the flag, then the config file, then [`DEFAULT_LOG_FILE`].
pub fn log_path(common: &CommonOpts, configured: Option<&Path>) -> PathBuf {
    common
        .log_file
        .clone()
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Install the global subscriber. Hold the returned guard until exit so
/// buffered file output is flushed.
pub fn init(common: &CommonOpts, log_file: &Path) -> Option<WorkerGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(common.log_level.as_filter()));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file_layer, guard, file_error) = match open_appender(log_file) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new(file_level(common.log_level).as_filter()));
            (Some(layer), Some(guard), None)
        }
        Err(err) => (None, None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    if let Some(err) = file_error {
        warn!(
            path = %log_file.display(),
            "cannot open log file ({err}); logging to console only"
        );
    }

    guard
}

/// The file never drops below `info`; a noisier console drags it along.
fn file_level(console: LogLevel) -> LogLevel {
    console.max(LogLevel::Info)
}

/// `rolling::never` without the panic on an unwritable path.
fn open_appender(path: &Path) -> Result<RollingFileAppender, String> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| "log path has no file name".to_owned())?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn common(log_file: Option<&str>) -> CommonOpts {
        CommonOpts {
            output: OutputFormat::Json,
            log_file: log_file.map(PathBuf::from),
            log_level: LogLevel::Warn,
            completions: None,
        }
    }

    #[test]
    fn flag_beats_config_beats_default() {
        let configured = Path::new("/tmp/from-config.log");
        assert_eq!(
            log_path(&common(Some("/tmp/flag.log")), Some(configured)),
            PathBuf::from("/tmp/flag.log")
        );
        assert_eq!(log_path(&common(None), Some(configured)), configured);
        assert_eq!(
            log_path(&common(None), None),
            PathBuf::from(DEFAULT_LOG_FILE)
        );
    }

    #[test]
    fn file_keeps_info_even_when_console_is_quiet() {
        assert_eq!(file_level(LogLevel::Error), LogLevel::Info);
        assert_eq!(file_level(LogLevel::Warn), LogLevel::Info);
        assert_eq!(file_level(LogLevel::Debug), LogLevel::Debug);
    }

    #[test]
    fn appender_opens_in_writable_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_appender(&dir.path().join("fmc.log")).is_ok());
    }

    #[test]
    fn appender_reports_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();
        assert!(open_appender(&blocker.join("fmc.log")).is_err());
    }
}
