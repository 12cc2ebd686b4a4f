//! Image types
//!
//! References to generated images and entries from the stored-image listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque reference to a generated image (URL, data URL or storage key),
/// exactly as returned by the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedImage(String);

impl GeneratedImage {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn reference(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image previously written to the bucket, as listed by `GET /api/images`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Storage key, also the search identifier
    pub key: String,
    /// Upload timestamp as sent by the server
    pub uploaded: String,
}

impl StoredImage {
    /// Parse the upload timestamp, if it is RFC 3339
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.uploaded)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc))
    }

    /// Short human readable upload date, falling back to the raw value
    pub fn uploaded_label(&self) -> String {
        self.uploaded_at()
            .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.uploaded.clone())
    }
}
