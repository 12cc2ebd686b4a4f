//! Settings storage
//!
//! Manages persistence of user preferences and connection settings.

use crate::storage::{default_download_dir, get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL used when nothing is configured (local worker dev server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8787";

/// Environment variable overriding the API base URL at startup
pub const API_URL_ENV: &str = "IMAGEGEN_API_URL";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Root URL of the image generation worker
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Per-request timeout in seconds; requests never time out when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Where downloaded images are written (defaults to the user's Downloads)
    #[serde(default)]
    pub download_directory: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            theme: default_theme(),
            request_timeout_secs: None,
            download_directory: None,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Normalizes values a hand-edited settings file may get wrong.
    pub fn validate(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            default_api_base_url()
        } else {
            trimmed.to_string()
        };

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }

        if self.request_timeout_secs == Some(0) {
            self.request_timeout_secs = None;
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }

    /// Flip between the dark and light theme
    pub fn toggle_theme(&mut self) {
        self.theme = if self.is_dark() { "light" } else { "dark" }.to_string();
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Directory downloaded images are written to
    pub fn download_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.download_directory {
            Some(dir) => Ok(dir.clone()),
            None => default_download_dir(),
        }
    }

    /// Replace the base URL (used for the environment override)
    pub fn override_api_base_url(&mut self, url: &str) {
        self.api_base_url = url.to_string();
        self.validate();
    }

    /// Apply `IMAGEGEN_API_URL` if it is set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            tracing::info!("Using API base URL from {}: {}", API_URL_ENV, url);
            self.override_api_base_url(&url);
        }
        self
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    let loaded = get_settings_path().and_then(|path| load_settings_from(&path));
    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load and validate settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

/// Save settings to a specific file, creating parent directories
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
