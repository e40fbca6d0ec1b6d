//! Configuration System
//!
//! Loads the terminal client's configuration from a TOML file with
//! environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;
use crate::shell::ZENQUOTES_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub quotes: QuotesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Journal backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the session (token + user) is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

fn default_session_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("mindjournal").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("./mindjournal_session.json"))
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Quote of the day service
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesConfig {
    #[serde(default = "default_quotes_url")]
    pub url: String,

    #[serde(default = "default_quotes_enabled")]
    pub enabled: bool,
}

fn default_quotes_url() -> String {
    ZENQUOTES_URL.to_string()
}

fn default_quotes_enabled() -> bool {
    true
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            url: default_quotes_url(),
            enabled: default_quotes_enabled(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mindjournal").join("config.toml")),
            Some(PathBuf::from("./mindjournal.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// An explicit file must load; otherwise fall back to the defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `MINDJOURNAL_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("MINDJOURNAL_API_URL") {
            self.api.base_url = url;
        }

        if let Some(file) = lookup("MINDJOURNAL_SESSION_FILE") {
            self.session.file = PathBuf::from(file);
        }

        if let Some(url) = lookup("MINDJOURNAL_QUOTES_URL") {
            self.quotes.url = url;
        }
        if let Some(enabled) = lookup("MINDJOURNAL_QUOTES_ENABLED") {
            match enabled.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.quotes.enabled = true,
                "0" | "false" | "no" | "off" => self.quotes.enabled = false,
                other => tracing::warn!("Ignoring MINDJOURNAL_QUOTES_ENABLED={:?}", other),
            }
        }

        if let Some(level) = lookup("MINDJOURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MINDJOURNAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# MindJournal Configuration
#
# Environment variables override these settings:
# - MINDJOURNAL_API_URL
# - MINDJOURNAL_SESSION_FILE
# - MINDJOURNAL_QUOTES_URL
# - MINDJOURNAL_QUOTES_ENABLED
# - MINDJOURNAL_LOG_LEVEL
# - MINDJOURNAL_LOG_FORMAT

[api]
# Journal backend base URL
base_url = "http://localhost:4000/api"

[session]
# Where the login token and user are kept
# (defaults to <data dir>/mindjournal/session.json)
# file = "/home/me/.local/share/mindjournal/session.json"

[quotes]
# Quote of the day service
url = "https://zenquotes.io/api/today"

# Set to false to always show the built-in quote
enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
