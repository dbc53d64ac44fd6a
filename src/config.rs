use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub swipe: SwipeSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Acting profile identifier; empty means preview mode and decisions are
    /// never sent to the backend
    #[serde(default)]
    pub profile_id: String,
    #[serde(default = "default_max_results")]
    pub max_results: u16,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            profile_id: String::new(),
            max_results: default_max_results(),
        }
    }
}

impl SessionSettings {
    /// The configured profile id, or `None` in preview mode
    pub fn active_profile_id(&self) -> Option<String> {
        if self.profile_id.trim().is_empty() {
            None
        } else {
            Some(self.profile_id.clone())
        }
    }
}

fn default_max_results() -> u16 {
    25
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwipeSettings {
    /// Duration of the visual settle transition in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
        }
    }
}

fn default_settle_ms() -> u64 {
    280
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with LINKMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with LINKMATCH_)
            // e.g., LINKMATCH__BACKEND__BASE_URL -> backend.base_url
            .add_source(
                Environment::with_prefix("LINKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("LINKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
