//! Configuration system for notequill.
//!
//! Configuration loads from a TOML file with sensible defaults for
//! every field, so a partial (or absent, or unreadable) config file is
//! never an error.
//!
//! # Example
//!
//! ```
//! use notequill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert!(config.enable_mouse);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the notequill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `enable_mouse` - Enable mouse clicks and wheel scrolling (default: true)
/// * `data_file` - Optional override for the board file location;
///   when unset the platform data directory is used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Enable mouse clicks and wheel scrolling
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,

    /// Optional override for the board file location
    #[serde(default)]
    pub data_file: Option<String>,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_enable_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_mouse: default_enable_mouse(),
            data_file: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/notequill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("notequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or
    /// can't be read or parsed.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "default-dark");
        assert!(config.enable_mouse);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(r#"theme = "gruvbox-dark""#).unwrap();
        assert_eq!(config.theme, "gruvbox-dark");
        assert!(config.enable_mouse);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_data_file_override() {
        let config: Config = toml::from_str(r#"data_file = "/tmp/my-board.json""#).unwrap();
        assert_eq!(config.data_file.as_deref(), Some("/tmp/my-board.json"));
    }
}
