//! Errors raised by the application shell.
//!
//! The dashboard view model itself never fails; everything here belongs to
//! the terminal, config file and log file boundaries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but could not be read or parsed.
    #[error("Failed to load config from {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The home directory could not be determined.
    #[error("Could not determine the home directory")]
    NoHomeDir,

    /// A logger was already installed for this process.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_the_path() {
        let err = AppError::Config {
            path: PathBuf::from("/tmp/frontdesk.json"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/frontdesk.json"));
        assert!(msg.contains("bad json"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
