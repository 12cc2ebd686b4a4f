//! Image downloads
//!
//! Saves the bytes behind an image reference into the download directory.
//! Existing files are never overwritten; a numeric suffix is added instead.

use crate::api::{ApiError, ImageApi};
use crate::storage::StorageError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// File name used when the reference carries no usable name
pub const DEFAULT_FILE_NAME: &str = "generated-image.png";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Failed to fetch image: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to save image: {0}")]
    Storage(#[from] StorageError),
}

/// Pick a local file name for a reference.
///
/// Stored-image keys like `sunset-1718000000.png` keep their own name; URLs,
/// data URLs and extension-less keys fall back to [`DEFAULT_FILE_NAME`].
pub fn file_name_for(reference: &str) -> String {
    let is_plain_key = !reference.contains("://")
        && !reference.starts_with("data:")
        && !reference.starts_with('/');
    if !is_plain_key {
        return DEFAULT_FILE_NAME.to_string();
    }

    let sanitized = sanitize_file_name(reference);
    match Path::new(&sanitized).extension() {
        Some(_) => sanitized,
        None => DEFAULT_FILE_NAME.to_string(),
    }
}

fn sanitize_file_name(name: &str) -> String {
    let flattened = name.trim().replace('\\', "/").replace('/', "__");

    let mut sanitized = String::with_capacity(flattened.len());
    for ch in flattened.chars() {
        let invalid = matches!(ch, '<' | '>' | ':' | '"' | '|' | '?' | '*');
        if invalid || ch.is_control() {
            sanitized.push('_');
        } else {
            sanitized.push(ch);
        }
    }

    while sanitized.ends_with('.') || sanitized.ends_with(' ') {
        sanitized.pop();
    }
    sanitized
}

/// First path in `dir` that does not exist yet: `name.ext`, `name-1.ext`, ...
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1u32;
    loop {
        let candidate = dir.join(format!("{}-{}{}", stem, counter, extension));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Write `bytes` into `dir` under a unique name derived from `file_name`
pub async fn save_image(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir).await?;

    let output_path = unique_path(dir, file_name);
    let temp_path = output_path.with_file_name(format!(
        "{}.tmp",
        output_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
    ));

    let mut temp_file = fs::File::create(&temp_path).await?;
    temp_file.write_all(bytes).await?;
    temp_file.flush().await?;
    drop(temp_file);

    fs::rename(&temp_path, &output_path).await?;

    tracing::info!("Saved image to {:?} ({} bytes)", output_path, bytes.len());
    Ok(output_path)
}

/// Fetch an image reference through the API and save it into `dir`
pub async fn download_image(
    api: &dyn ImageApi,
    reference: &str,
    dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let bytes = api.fetch_image(reference).await?;
    let path = save_image(dir, &file_name_for(reference), &bytes).await?;
    Ok(path)
}

/// Download the selected image, if there is one. With nothing selected
/// nothing is fetched or written and `Ok(None)` is returned.
pub async fn download_selected(
    api: &dyn ImageApi,
    selected: Option<&str>,
    dir: &Path,
) -> Result<Option<PathBuf>, DownloadError> {
    let Some(reference) = selected else {
        tracing::debug!("Download requested with no image selected");
        return Ok(None);
    };
    download_image(api, reference, dir).await.map(Some)
}
