//! Shared type definitions
//!
//! Wire types returned by the image-generation API and used across the form,
//! gallery and UI layers.

pub mod image;
pub mod model;
pub mod schema;
