use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fallback backend endpoint when neither env nor config provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "SHIFTDESK_API_URL";

/// Environment variable overriding the session token file.
pub const TOKEN_FILE_ENV: &str = "SHIFTDESK_TOKEN_FILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_token_file")]
    pub token_file: String,
    #[serde(default = "default_sheet_name")]
    pub default_sheet_name: String,
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: u32,
    #[serde(default = "default_records_limit")]
    pub records_limit: u32,
    #[serde(default)]
    pub show_weekday: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_token_file() -> String {
    Config::config_dir()
        .join("token")
        .to_string_lossy()
        .to_string()
}
fn default_sheet_name() -> String {
    "Shifts Data".to_string()
}
fn default_upcoming_limit() -> u32 {
    10
}
fn default_records_limit() -> u32 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_file: default_token_file(),
            default_sheet_name: default_sheet_name(),
            upcoming_limit: default_upcoming_limit(),
            records_limit: default_records_limit(),
            show_weekday: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftdesk")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".shiftdesk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftdesk.conf")
    }

    /// Load configuration from `path`, or return defaults if not found.
    /// Environment overrides are applied on top.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            Self::parse(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    /// Parse YAML content; missing keys fall back to their defaults.
    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api_url = url;
        }
        if let Ok(file) = env::var(TOKEN_FILE_ENV)
            && !file.trim().is_empty()
        {
            self.token_file = file;
        }
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
