//! Configuration management for the Go-Tanya client.
//!
//! Handles loading and saving configuration from JSONC files.
//! Holds the display name, pagination and cooldown settings, and logging
//! preferences.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Name shown on the profile screen
    pub username: String,
    /// Questions revealed per "More..." press
    pub page_size: usize,
    /// Seconds before another OTP may be requested
    pub otp_cooldown_secs: u32,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "Gabriel".to_string(),
            page_size: 5,
            otp_cooldown_secs: 60,
            log_path: "go-tanya.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Byte offset of the first `//` on a line that is outside a string.
fn comment_start(line: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    let mut prev_slash = false;
    for (pos, ch) in line.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                prev_slash = false;
            }
            '/' if prev_slash => return Some(pos - 1),
            '/' => prev_slash = true,
            _ => prev_slash = false,
        }
    }
    None
}

/// Strip `//` line comments that are not inside a string.
fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match comment_start(line) {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/go-tanya/config.jsonc`
    /// 3. `~/.config/go-tanya/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Directory holding the config file and relative log files.
    pub fn config_home() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("go-tanya"))
    }

    /// Get default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::config_home()?.join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Details
    /// If log_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_path);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            Ok(Self::config_home()?.join(&self.log_path))
        }
    }
}
