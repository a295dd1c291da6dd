//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::ThemeConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Theme settings
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Editor command; falls back to $VISUAL / $EDITOR when unset
    pub editor: Option<String>,
    /// Directory to start in; defaults to the process working directory
    pub start_path: Option<String>,
    /// How many ranked entries the history prompt shows
    pub history_limit: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            editor: None,
            start_path: None,
            history_limit: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Spaces of indentation per tree depth level
    pub indent: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing
    /// or malformed.
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => toml_edit::de::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Load the config, seeding a default file on first run so there is
    /// something to edit.
    pub fn load_or_init() -> Self {
        if let Some(path) = config_file()
            && !path.exists()
        {
            let _ = Self::default().save();
        }
        Self::load()
    }

    /// Write the current config back out.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = config_file() else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml_edit::ser::to_string_pretty(self)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(&path, content)
    }
}

/// Get the config directory path for the current platform
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // Windows: %APPDATA%\twig
        std::env::var("APPDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("twig"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        // Elsewhere: $XDG_CONFIG_HOME/twig, falling back to ~/.config/twig
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOME").ok().map(|p| PathBuf::from(p).join(".config")))
            .map(|p| p.join("twig"))
    }
}

/// Get the config file path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the visit-history file path
pub fn history_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("history"))
}

/// Path of the file the shell wrapper reads to change its directory
pub fn lastdir_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("lastdir"))
}

/// Record the directory the enclosing shell should land in after exit.
pub fn write_lastdir(path: &Path) {
    let Some(file) = lastdir_file() else {
        return;
    };
    if let Some(dir) = file.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let _ = fs::write(&file, path.display().to_string());
}
