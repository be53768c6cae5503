//! Log level selection and file logger setup.
//!
//! Call sites use the `log` facade. The backend is a `tracing-subscriber`
//! formatter writing to a file so nothing is printed over the TUI.

use crate::error::AppError;
use std::env;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "frontdesk.log";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

/// Level used when `RUST_LOG` is not set.
pub fn default_level(debug: bool) -> LogLevel {
    if debug { LogLevel::Debug } else { LogLevel::Info }
}

/// Builds the filter: `RUST_LOG` wins, otherwise the config-driven default.
pub fn build_filter(rust_log: Option<&str>, debug: bool) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(parse_rust_log_level(directives).as_str())),
        _ => EnvFilter::new(default_level(debug).as_str()),
    }
}

/// Installs the file logger under `log_dir`.
///
/// The returned guard flushes pending records on drop and must be held for
/// the lifetime of the program.
pub fn init(log_dir: &Path, debug: bool) -> Result<WorkerGuard, AppError> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let rust_log = env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(rust_log.as_deref(), debug))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("frontdesk=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("frontdesk=debug,tokio=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_default_level_follows_debug_flag() {
        assert_eq!(default_level(true), LogLevel::Debug);
        assert_eq!(default_level(false), LogLevel::Info);
    }

    #[test]
    fn test_build_filter_prefers_rust_log() {
        assert_eq!(build_filter(Some("warn"), true).to_string(), "warn");
        assert_eq!(build_filter(None, true).to_string(), "debug");
        assert_eq!(build_filter(Some("  "), false).to_string(), "info");
    }

    #[test]
    fn test_level_filter_conversion() {
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
        assert!(LogLevel::Error > LogLevel::Debug);
    }
}
