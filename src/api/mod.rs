//! Image generation API
//!
//! The trait the UI talks to and the request/error types shared by every
//! implementation. `client::HttpImageApi` is the reqwest-backed one.

pub mod client;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::image::{GeneratedImage, StoredImage};
use crate::types::model::Model;
use crate::types::schema::Schema;

pub use client::HttpImageApi;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Body of `POST /api/generate_image`
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub inputs: Map<String, Value>,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, inputs: Map<String, Value>) -> Self {
        Self {
            model: model.into(),
            inputs,
        }
    }

    /// Flatten into `{model, ...inputs}`. The selected model always wins over
    /// an input that happens to be named `model`.
    pub fn to_body(&self) -> Value {
        let mut body = self.inputs.clone();
        body.insert("model".to_string(), Value::String(self.model.clone()));
        Value::Object(body)
    }
}

/// Operations the front end needs from the image service
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// `GET /api/models`
    async fn list_models(&self) -> Result<Vec<Model>, ApiError>;

    /// `GET /api/schema?model=<id>`
    async fn fetch_schema(&self, model_id: &str) -> Result<Schema, ApiError>;

    /// `POST /api/generate_image`, returning the raw reference from the body
    async fn generate_image(&self, request: &GenerationRequest) -> Result<GeneratedImage, ApiError>;

    /// `GET /api/images`
    async fn list_images(&self) -> Result<Vec<StoredImage>, ApiError>;

    /// Fetch the bytes behind an image reference
    async fn fetch_image(&self, reference: &str) -> Result<Vec<u8>, ApiError>;

    /// URL an `img` element can load a reference from
    fn image_src(&self, reference: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_flattens_inputs() {
        let mut inputs = Map::new();
        inputs.insert("prompt".to_string(), json!("a cat in space"));
        inputs.insert("num_steps".to_string(), json!(20));
        let request = GenerationRequest::new("@cf/model", inputs);

        assert_eq!(
            request.to_body(),
            json!({"model": "@cf/model", "prompt": "a cat in space", "num_steps": 20})
        );
    }

    #[test]
    fn test_selected_model_wins_over_input() {
        let mut inputs = Map::new();
        inputs.insert("model".to_string(), json!("typed-by-user"));
        let request = GenerationRequest::new("selected", inputs);

        assert_eq!(request.to_body(), json!({"model": "selected"}));
    }
}
