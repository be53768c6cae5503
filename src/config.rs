//! Application configuration.

use crate::error::AppError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Directory under the user's home that holds config and logs.
const APP_DIR: &str = ".frontdesk";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Locale used to format the clock label.
    pub locale: Locale,
    /// Whether to paint a solid background behind the dashboard.
    pub with_background_color: bool,
    /// Log at debug level instead of info.
    pub debug_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            with_background_color: true,
            debug_logging: false,
        }
    }
}

impl Config {
    /// Create Config with the given locale and default display settings.
    #[allow(unused)]
    pub fn new(locale: Locale) -> Self {
        Config {
            locale,
            ..Self::default()
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the config at `path`, or returns defaults when no file exists.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Returns `~/.frontdesk`.
pub fn get_app_dir() -> Result<PathBuf, AppError> {
    let home = home::home_dir().ok_or(AppError::NoHomeDir)?;
    Ok(home.join(APP_DIR))
}

/// Returns `~/.frontdesk/config.json`.
pub fn get_config_path() -> Result<PathBuf, AppError> {
    Ok(get_app_dir()?.join(CONFIG_FILE))
}

/// Picks the effective locale: CLI flag, then environment, then config file.
pub fn resolve_locale(cli: Option<Locale>, env_value: Option<&str>, config: &Config) -> Locale {
    cli.or_else(|| env_value.and_then(|v| v.parse::<Locale>().ok()))
        .unwrap_or(config.locale)
}
