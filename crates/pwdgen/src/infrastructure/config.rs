//! TOML configuration for the pwdgen binary.
//!
//! The file is optional and read-only: pwdgen never writes it.  It is looked up
//! at `--config <path>` or, failing that, in the platform config directory:
//! - Windows:  `%APPDATA%\pwdgen\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/pwdgen/config.toml` or `~/.config/pwdgen/config.toml`
//! - macOS:    `~/Library/Application Support/pwdgen/config.toml`
//!
//! Example:
//!
//! ```toml
//! log_level = "info"
//!
//! [password]
//! length = 12
//! charset = "alphanumeric"
//!
//! [screen]
//! fallback_rows = 24
//! fallback_columns = 80
//! ```
//!
//! Every field has a default, so a partial file (or no file at all) is valid.
//! Command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::generator::Charset;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}

/// Password shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordConfig {
    /// Characters per password.
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default)]
    pub charset: Charset,
}

/// Geometry used when the terminal cannot be queried (output piped, no tty).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_fallback_rows")]
    pub fallback_rows: u16,
    #[serde(default = "default_fallback_columns")]
    pub fallback_columns: u16,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_length() -> usize {
    12
}
fn default_fallback_rows() -> u16 {
    24
}
fn default_fallback_columns() -> u16 {
    80
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            password: PasswordConfig::default(),
            screen: ScreenConfig::default(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            charset: Charset::default(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            fallback_rows: default_fallback_rows(),
            fallback_columns: default_fallback_columns(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the default config file path for this platform.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads the configuration.
///
/// With `explicit` set, that file must exist.  Otherwise the platform path is
/// tried and a missing file (or an undeterminable config directory) yields
/// [`AppConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match config_file_path() {
            Ok(path) => load_config_or_default(&path),
            Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
            Err(e) => Err(e),
        },
    }
}

/// Loads `path`, returning [`AppConfig::default()`] if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Resolves the platform config directory, including the `pwdgen` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("pwdgen"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("pwdgen")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("pwdgen"))
    }
}
