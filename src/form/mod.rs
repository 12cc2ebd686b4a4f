//! Schema-driven form engine
//!
//! Holds the selected model, its schema and the raw text of every field.
//! Selecting a model hands out a [`SchemaTicket`]; a fetched schema is only
//! applied when its ticket is the latest one, so a slow response for a model
//! the user already switched away from cannot overwrite the current form.

pub mod value;

use serde_json::Map;
use std::collections::BTreeMap;

use crate::api::GenerationRequest;
use crate::types::schema::{FieldKind, Schema};

pub use value::{coerce, raw_from_default, FieldValue, FormError};

/// Raw control text keyed by field name. A missing entry is an undefined value.
pub type InputValues = BTreeMap<String, String>;

/// Proof that a schema fetch was started for a particular selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTicket {
    model_id: String,
    token: u64,
}

impl SchemaTicket {
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// One rendered control
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: String,
    pub value: String,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub required: bool,
    /// Coercion problem with the current non-empty value
    pub error: Option<FormError>,
}

impl FormField {
    pub fn input_type(&self) -> &'static str {
        self.kind.input_type()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormEngine {
    selected_model: Option<String>,
    schema: Option<Schema>,
    values: InputValues,
    latest_token: u64,
    /// The fetch for the latest ticket failed; no fields until the next selection
    fetch_failed: bool,
}

impl FormEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.selected_model.as_deref()
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn values(&self) -> &InputValues {
        &self.values
    }

    /// A model is selected and its schema fetch is still in flight
    pub fn is_awaiting_schema(&self) -> bool {
        self.selected_model.is_some() && self.schema.is_none() && !self.fetch_failed
    }

    /// Change the selected model.
    ///
    /// Drops the current schema and values immediately and returns the ticket
    /// the caller must present with the fetched schema. Re-selecting the
    /// current model changes nothing and returns `None`, as does clearing the
    /// selection with an empty id.
    pub fn select_model(&mut self, model_id: &str) -> Option<SchemaTicket> {
        if self.selected_model.as_deref() == Some(model_id) {
            return None;
        }

        self.schema = None;
        self.values.clear();
        self.fetch_failed = false;
        self.latest_token += 1;

        if model_id.is_empty() {
            self.selected_model = None;
            return None;
        }

        self.selected_model = Some(model_id.to_string());
        Some(SchemaTicket {
            model_id: model_id.to_string(),
            token: self.latest_token,
        })
    }

    /// Apply a fetched schema, replacing values with the schema defaults.
    ///
    /// Returns `false` and leaves the form untouched when a newer selection
    /// has been made since the ticket was issued.
    pub fn apply_schema(&mut self, ticket: &SchemaTicket, schema: Schema) -> bool {
        if ticket.token != self.latest_token {
            tracing::debug!(
                "Discarding stale schema for {} (token {}, latest {})",
                ticket.model_id,
                ticket.token,
                self.latest_token
            );
            return false;
        }

        self.values = schema
            .properties()
            .filter_map(|(name, property)| {
                property
                    .default
                    .as_ref()
                    .map(|default| (name.to_string(), raw_from_default(default)))
            })
            .collect();
        self.schema = Some(schema);
        true
    }

    /// Record that the fetch for `ticket` failed. The form stays empty with
    /// nothing pending. Stale tickets are ignored.
    pub fn schema_failed(&mut self, ticket: &SchemaTicket) -> bool {
        if ticket.token != self.latest_token {
            return false;
        }
        self.fetch_failed = true;
        true
    }

    /// Record the text typed into a field. Names outside the schema are ignored.
    pub fn set_value(&mut self, name: &str, raw: impl Into<String>) -> bool {
        let known = self
            .schema
            .as_ref()
            .is_some_and(|schema| schema.property(name).is_some());
        if !known {
            tracing::debug!("Ignoring value for unknown field {}", name);
            return false;
        }
        self.values.insert(name.to_string(), raw.into());
        true
    }

    /// Current text of a field, empty when undefined
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Controls to render, one per schema property in server order
    pub fn fields(&self) -> Vec<FormField> {
        let Some(schema) = &self.schema else {
            return Vec::new();
        };

        schema
            .properties()
            .map(|(name, property)| {
                let value = self.value(name).to_string();
                let error = if value.is_empty() {
                    None
                } else {
                    coerce(name, property, &value).err()
                };
                FormField {
                    name: name.to_string(),
                    label: field_label(name),
                    kind: property.kind(),
                    placeholder: property.description.clone(),
                    value,
                    minimum: property.minimum,
                    maximum: property.maximum,
                    required: schema.is_required(name),
                    error,
                }
            })
            .collect()
    }

    /// A model is selected, its schema is loaded and every required field
    /// holds a defined, non-empty value
    pub fn is_valid(&self) -> bool {
        self.check_required().is_ok()
    }

    fn check_required(&self) -> Result<(&str, &Schema), FormError> {
        let model = self.selected_model.as_deref().ok_or(FormError::NoModel)?;
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| FormError::SchemaPending(model.to_string()))?;

        for name in &schema.input.required {
            let defined = self.values.get(name).is_some_and(|value| !value.is_empty());
            if !defined {
                return Err(FormError::MissingRequired(name.clone()));
            }
        }
        Ok((model, schema))
    }

    /// Build the generation request, coercing every non-empty value to its
    /// declared type. Empty values are left out of the payload.
    pub fn payload(&self) -> Result<GenerationRequest, FormError> {
        let (model, schema) = self.check_required()?;

        let mut inputs = Map::new();
        for (name, property) in schema.properties() {
            let raw = self.value(name);
            if raw.is_empty() {
                continue;
            }
            inputs.insert(name.to_string(), coerce(name, property, raw)?.to_json());
        }

        Ok(GenerationRequest::new(model, inputs))
    }
}

/// Property name with its first character upper-cased
pub fn field_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
