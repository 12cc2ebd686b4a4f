//! Generation submission
//!
//! Tracks the images generated in this session and whether a request is in
//! flight. The UI calls [`GenerationLog::begin`] to obtain a request, awaits
//! the API itself, then hands the outcome to [`GenerationLog::complete`].

use thiserror::Error;

use crate::api::{ApiError, GenerationRequest};
use crate::form::{FormEngine, FormError};
use crate::types::image::GeneratedImage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("A generation is already in progress")]
    Busy,
    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationLog {
    images: Vec<GeneratedImage>,
    in_flight: usize,
}

impl GenerationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated images in completion order
    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self, form: &FormEngine) -> bool {
        !self.is_loading() && form.is_valid()
    }

    /// Start a submission: checks the form, builds the payload and marks the
    /// log as loading.
    pub fn begin(&mut self, form: &FormEngine) -> Result<GenerationRequest, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }
        let request = form.payload()?;
        self.in_flight += 1;
        Ok(request)
    }

    /// Finish a submission. Loading is cleared whatever the outcome; a
    /// successful reference is appended, a failure is logged and dropped.
    pub fn complete(&mut self, outcome: Result<GeneratedImage, ApiError>) -> Option<&GeneratedImage> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(image) => {
                tracing::info!("Image generated ({} in session)", self.images.len() + 1);
                self.images.push(image);
                self.images.last()
            }
            Err(e) => {
                tracing::error!("Error generating image: {}", e);
                None
            }
        }
    }
}
