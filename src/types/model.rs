//! Model types
//!
//! A selectable generation backend as listed by `GET /api/models`.

use serde::{Deserialize, Serialize};

/// A generation backend offered by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Identifier sent back in schema and generation requests
    pub id: String,
    /// Display name shown in the model picker
    pub name: String,
}
