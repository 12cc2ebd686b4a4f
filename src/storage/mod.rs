//! Persistent storage
//!
//! Local persistence: the settings file and images saved from the gallery.

pub mod downloads;
pub mod settings;

use directories::{ProjectDirs, UserDirs};
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application data directory (settings live here)
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("dev", "imagegen", "imagegen")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

/// Directory images are saved to when no override is configured
pub fn default_download_dir() -> Result<PathBuf, StorageError> {
    let user_dirs = UserDirs::new().ok_or(StorageError::NoDataDir)?;
    match user_dirs.download_dir() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(user_dirs.home_dir().join("Downloads")),
    }
}
