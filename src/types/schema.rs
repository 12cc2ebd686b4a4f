//! Schema types
//!
//! The per-model input description returned by `GET /api/schema?model=<id>`.
//! Property order is kept exactly as the server sent it so the form renders
//! fields in the order the model author intended.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Value type a schema property declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Free text (also used for every type the form has no control for)
    #[default]
    Text,
    /// Whole number
    Integer,
    /// Floating point number
    Number,
    /// `true` or `false`, typed as JSON
    Boolean,
    /// JSON array, typed as JSON text
    Array,
    /// JSON object, typed as JSON text
    Object,
}

impl FieldKind {
    /// Map a JSON-schema `type` name to a field kind
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "integer" => FieldKind::Integer,
            "number" => FieldKind::Number,
            "boolean" => FieldKind::Boolean,
            "array" => FieldKind::Array,
            "object" => FieldKind::Object,
            _ => FieldKind::Text,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Number)
    }

    /// Kinds whose text is parsed as JSON before it is sent
    pub fn is_json(self) -> bool {
        matches!(self, FieldKind::Boolean | FieldKind::Array | FieldKind::Object)
    }

    /// HTML input type used to render the control
    pub fn input_type(self) -> &'static str {
        if self.is_numeric() {
            "number"
        } else {
            "text"
        }
    }
}

/// Description of a single input field
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaProperty {
    /// JSON-schema type name ("string", "integer", "number", ...)
    #[serde(rename = "type", default)]
    pub type_name: String,
    /// Human readable hint, shown as the placeholder
    #[serde(default)]
    pub description: String,
    /// Value the field starts with
    #[serde(default)]
    pub default: Option<Value>,
    /// Inclusive lower bound for numeric fields
    #[serde(default)]
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric fields
    #[serde(default)]
    pub maximum: Option<f64>,
}

impl SchemaProperty {
    pub fn kind(&self) -> FieldKind {
        FieldKind::from_type_name(&self.type_name)
    }
}

/// Input section of a model schema
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SchemaInput {
    /// Properties in server order
    #[serde(default)]
    pub properties: IndexMap<String, SchemaProperty>,
    /// Names of the properties that must hold a non-empty value
    #[serde(default)]
    pub required: Vec<String>,
}

/// A model's input schema
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    pub input: SchemaInput,
}

impl Schema {
    /// Iterate over properties in server order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &SchemaProperty)> {
        self.input
            .properties
            .iter()
            .map(|(name, property)| (name.as_str(), property))
    }

    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.input.properties.get(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.input.required.iter().any(|required| required == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.properties().map(|(name, _)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SDXL_SCHEMA: &str = r#"{
        "input": {
            "properties": {
                "prompt": {"type": "string", "description": "A text description of the image you want to generate"},
                "num_steps": {"type": "integer", "description": "The number of diffusion steps", "default": 20, "maximum": 20},
                "guidance": {"type": "number", "description": "Controls how closely the image follows the prompt", "default": 7.5},
                "image": {"type": "array", "description": "An array of integers that represent the image data"},
                "height": {"type": "integer", "description": "Height in pixels", "minimum": 256, "maximum": 2048}
            },
            "required": ["prompt"]
        }
    }"#;

    #[test]
    fn test_properties_keep_server_order() {
        let schema: Schema = serde_json::from_str(SDXL_SCHEMA).unwrap();
        assert_eq!(
            schema.field_names(),
            vec!["prompt", "num_steps", "guidance", "image", "height"]
        );
    }

    #[test]
    fn test_property_kinds() {
        let schema: Schema = serde_json::from_str(SDXL_SCHEMA).unwrap();
        assert_eq!(schema.property("prompt").unwrap().kind(), FieldKind::Text);
        assert_eq!(schema.property("num_steps").unwrap().kind(), FieldKind::Integer);
        assert_eq!(schema.property("guidance").unwrap().kind(), FieldKind::Number);
        assert_eq!(schema.property("image").unwrap().kind(), FieldKind::Array);
        assert!(FieldKind::Array.is_json());
        assert_eq!(FieldKind::from_type_name("boolean"), FieldKind::Boolean);
        // Unknown types fall back to text
        assert_eq!(FieldKind::from_type_name("file"), FieldKind::Text);
        assert_eq!(FieldKind::Integer.input_type(), "number");
        assert_eq!(FieldKind::Text.input_type(), "text");
    }

    #[test]
    fn test_bounds_and_defaults() {
        let schema: Schema = serde_json::from_str(SDXL_SCHEMA).unwrap();
        let height = schema.property("height").unwrap();
        assert_eq!(height.minimum, Some(256.0));
        assert_eq!(height.maximum, Some(2048.0));
        assert!(height.default.is_none());

        let steps = schema.property("num_steps").unwrap();
        assert_eq!(steps.default, Some(serde_json::json!(20)));
        assert_eq!(steps.minimum, None);
    }

    #[test]
    fn test_required_lookup() {
        let schema: Schema = serde_json::from_str(SDXL_SCHEMA).unwrap();
        assert!(schema.is_required("prompt"));
        assert!(!schema.is_required("guidance"));
        assert!(!schema.is_required("unknown"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let schema: Schema = serde_json::from_str(r#"{"input": {}}"#).unwrap();
        assert!(schema.field_names().is_empty());
        assert!(schema.input.required.is_empty());
    }

    #[test]
    fn test_repeated_key_replaces_in_place() {
        let json = r#"{"input": {"properties": {
            "a": {"type": "string"},
            "b": {"type": "string"},
            "a": {"type": "integer"}
        }}}"#;
        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.field_names(), vec!["a", "b"]);
        assert_eq!(schema.property("a").unwrap().kind(), FieldKind::Integer);
    }

    #[test]
    fn test_order_survives_value_round_trip() {
        // Schemas built from an in-memory `Value` keep insertion order too
        let value: Value = serde_json::from_str(SDXL_SCHEMA).unwrap();
        let schema: Schema = serde_json::from_value(value).unwrap();
        assert_eq!(
            schema.field_names(),
            vec!["prompt", "num_steps", "guidance", "image", "height"]
        );

        let built: Schema = serde_json::from_value(serde_json::json!({
            "input": {"properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "string"}
            }}
        }))
        .unwrap();
        assert_eq!(built.field_names(), vec!["zeta", "alpha"]);
    }
}
