//! Configuration management for the coursework apps
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.coursework/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::errors::{AppError, Result};

/// Students listed by the marks app when no configuration overrides them
pub const DEFAULT_STUDENTS: [&str; 11] = [
    "Elon", "Bill", "Bruce", "Tony", "Natasha", "Kevin", "Ben", "Chris", "Gamora", "Clint",
    "Pepperpot",
];

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub grades: GradesConfig,
    pub rps: RpsConfig,
    pub paths: PathsConfig,
}

/// Console presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub author: Option<String>,
    pub color_output: bool,
    pub clear_screen: bool,
}

/// Student marks app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradesConfig {
    pub students: Vec<String>,
}

/// Rock/paper/scissors app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpsConfig {
    pub rounds: u32,
}

/// File system paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub history_file: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            author: None,
            color_output: true,
            clear_screen: false,
        }
    }
}

impl Default for GradesConfig {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self { rounds: 3 }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            history_file: "~/.coursework/history".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// ~/.coursework/config.toml, when a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".coursework").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.grades.students.is_empty() {
            return Err(AppError::ConfigError(
                "grades.students must list at least one student".to_string(),
            ));
        }

        if self.grades.students.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::ConfigError(
                "grades.students must not contain blank names".to_string(),
            ));
        }

        if self.rps.rounds == 0 {
            return Err(AppError::ConfigError(
                "rps.rounds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get history file path
    pub fn history_file(&self) -> PathBuf {
        Self::expand_path(&self.paths.history_file)
    }
}
