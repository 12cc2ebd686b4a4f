//! reqwest-backed API client
//!
//! Every endpoint path is resolved relative to the configured base URL, so a
//! deployment mounted under a path prefix keeps working.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Response, Url};

use super::{ApiError, GenerationRequest, ImageApi};
use crate::storage::settings::AppSettings;
use crate::types::image::{GeneratedImage, StoredImage};
use crate::types::model::Model;
use crate::types::schema::Schema;

const USER_AGENT: &str = concat!("imagegen/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the image generation worker
#[derive(Debug, Clone)]
pub struct HttpImageApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpImageApi {
    /// Build a client for `base_url`. Without a timeout a hung request waits
    /// forever, which is what the UI expects by default.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base,
        })
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, ApiError> {
        Self::new(&settings.api_base_url, settings.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Image-loader indirection for a stored key: `api/image?key=<key>`
    pub fn image_url(&self, key: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("api/image")?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(url)
    }

    /// Resolve a non-inline reference to the URL holding its bytes
    fn resolve(&self, reference: &str) -> Result<Url, ApiError> {
        if is_absolute_http(reference) {
            Url::parse(reference).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", reference, e)))
        } else if reference.starts_with('/') {
            self.endpoint(reference)
        } else {
            self.image_url(reference)
        }
    }
}

fn is_absolute_http(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

fn is_data_url(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// Decode a base64 `data:` URL into raw bytes
pub fn decode_data_url(reference: &str) -> Result<Vec<u8>, ApiError> {
    let rest = reference
        .strip_prefix("data:")
        .ok_or_else(|| ApiError::InvalidDataUrl("missing data: prefix".to_string()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ApiError::InvalidDataUrl("missing payload separator".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(ApiError::InvalidDataUrl(
            "only base64 data URLs are supported".to_string(),
        ));
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|e| ApiError::InvalidDataUrl(e.to_string()))
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ImageApi for HttpImageApi {
    async fn list_models(&self) -> Result<Vec<Model>, ApiError> {
        let response = self.client.get(self.endpoint("api/models")?).send().await?;
        let models: Vec<Model> = ensure_success(response).await?.json().await?;
        tracing::debug!("Fetched {} models", models.len());
        Ok(models)
    }

    async fn fetch_schema(&self, model_id: &str) -> Result<Schema, ApiError> {
        let mut url = self.endpoint("api/schema")?;
        url.query_pairs_mut().append_pair("model", model_id);
        let response = self.client.get(url).send().await?;
        let schema: Schema = ensure_success(response).await?.json().await?;
        tracing::debug!(
            "Fetched schema for {} ({} properties)",
            model_id,
            schema.input.properties.len()
        );
        Ok(schema)
    }

    async fn generate_image(&self, request: &GenerationRequest) -> Result<GeneratedImage, ApiError> {
        tracing::info!("Generating image with {}", request.model);
        let response = self
            .client
            .post(self.endpoint("api/generate_image")?)
            .json(&request.to_body())
            .send()
            .await?;
        let reference = ensure_success(response).await?.text().await?;
        Ok(GeneratedImage::new(reference))
    }

    async fn list_images(&self) -> Result<Vec<StoredImage>, ApiError> {
        let response = self.client.get(self.endpoint("api/images")?).send().await?;
        let images: Vec<StoredImage> = ensure_success(response).await?.json().await?;
        tracing::debug!("Fetched {} stored images", images.len());
        Ok(images)
    }

    async fn fetch_image(&self, reference: &str) -> Result<Vec<u8>, ApiError> {
        if is_data_url(reference) {
            return decode_data_url(reference);
        }
        let response = self.client.get(self.resolve(reference)?).send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn image_src(&self, reference: &str) -> String {
        if is_data_url(reference) || is_absolute_http(reference) {
            return reference.to_string();
        }
        match self.resolve(reference) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("Could not resolve image reference {}: {}", reference, e);
                reference.to_string()
            }
        }
    }
}
