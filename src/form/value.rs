//! Typed field values
//!
//! Raw text from the controls is kept as typed; it is coerced into a
//! [`FieldValue`] according to the declared schema type only when the
//! submission payload is built.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::types::schema::{FieldKind, SchemaProperty};

/// Form errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("No model selected")]
    NoModel,
    #[error("Schema for {0} has not loaded yet")]
    SchemaPending(String),
    #[error("{0} is required")]
    MissingRequired(String),
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidInteger { field: String, value: String },
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: String, value: String },
    #[error("{field} must be {expected} JSON, got {value:?}")]
    InvalidJson {
        field: String,
        expected: &'static str,
        value: String,
    },
    #[error("{field} must be {}", describe_bounds(.minimum, .maximum))]
    OutOfRange {
        field: String,
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
}

fn describe_bounds(minimum: &Option<f64>, maximum: &Option<f64>) -> String {
    match (minimum, maximum) {
        (Some(min), Some(max)) => format!("between {} and {}", min, max),
        (Some(min), None) => format!("at least {}", min),
        (None, Some(max)) => format!("at most {}", max),
        (None, None) => "within bounds".to_string(),
    }
}

/// A coerced input value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    /// Boolean, array or object, sent as parsed
    Json(Value),
}

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Integer(n) => Value::Number(Number::from(*n)),
            FieldValue::Number(n) => Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Json(value) => value.clone(),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Text(_) | FieldValue::Json(_) => None,
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Number(n) => Some(*n),
        }
    }
}

/// Text a schema default is shown as in its control. Non-string defaults
/// become their JSON text, which [`coerce`] parses back for JSON kinds.
pub fn raw_from_default(default: &Value) -> String {
    match default {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerce raw control text into the property's declared type, checking
/// `minimum`/`maximum` for numeric kinds.
pub fn coerce(field: &str, property: &SchemaProperty, raw: &str) -> Result<FieldValue, FormError> {
    let value = match property.kind() {
        FieldKind::Text => return Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => parse_integer(raw).ok_or_else(|| FormError::InvalidInteger {
            field: field.to_string(),
            value: raw.to_string(),
        })?,
        FieldKind::Number => parse_number(raw).ok_or_else(|| FormError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })?,
        kind => return parse_json(field, kind, raw),
    };

    if let Some(n) = value.as_f64() {
        let below = property.minimum.is_some_and(|min| n < min);
        let above = property.maximum.is_some_and(|max| n > max);
        if below || above {
            return Err(FormError::OutOfRange {
                field: field.to_string(),
                minimum: property.minimum,
                maximum: property.maximum,
            });
        }
    }

    Ok(value)
}

fn parse_integer(raw: &str) -> Option<FieldValue> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(FieldValue::Integer(n));
    }
    // Number inputs may report "20.0" for an integral value
    let n = trimmed.parse::<f64>().ok()?;
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(FieldValue::Integer(n as i64))
    } else {
        None
    }
}

fn parse_number(raw: &str) -> Option<FieldValue> {
    let n = raw.trim().parse::<f64>().ok()?;
    n.is_finite().then_some(FieldValue::Number(n))
}

fn parse_json(field: &str, kind: FieldKind, raw: &str) -> Result<FieldValue, FormError> {
    let (expected, matches): (&'static str, fn(&Value) -> bool) = match kind {
        FieldKind::Boolean => ("boolean", Value::is_boolean),
        FieldKind::Array => ("array", Value::is_array),
        _ => ("object", Value::is_object),
    };
    match serde_json::from_str::<Value>(raw.trim()) {
        Ok(value) if matches(&value) => Ok(FieldValue::Json(value)),
        _ => Err(FormError::InvalidJson {
            field: field.to_string(),
            expected,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn property(type_name: &str, minimum: Option<f64>, maximum: Option<f64>) -> SchemaProperty {
        SchemaProperty {
            type_name: type_name.to_string(),
            description: String::new(),
            default: None,
            minimum,
            maximum,
        }
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let prop = property("string", None, None);
        assert_eq!(
            coerce("prompt", &prop, "  a cat  ").unwrap(),
            FieldValue::Text("  a cat  ".to_string())
        );
    }

    #[test]
    fn test_integer_coercion() {
        let prop = property("integer", None, None);
        assert_eq!(coerce("seed", &prop, "42").unwrap(), FieldValue::Integer(42));
        assert_eq!(coerce("seed", &prop, " 7 ").unwrap(), FieldValue::Integer(7));
        assert_eq!(coerce("seed", &prop, "20.0").unwrap(), FieldValue::Integer(20));
        assert_eq!(
            coerce("seed", &prop, "2.5"),
            Err(FormError::InvalidInteger {
                field: "seed".to_string(),
                value: "2.5".to_string()
            })
        );
        assert!(matches!(
            coerce("seed", &prop, "abc"),
            Err(FormError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_number_coercion() {
        let prop = property("number", None, None);
        assert_eq!(coerce("guidance", &prop, "7.5").unwrap(), FieldValue::Number(7.5));
        assert_eq!(coerce("guidance", &prop, "3").unwrap(), FieldValue::Number(3.0));
        assert!(matches!(
            coerce("guidance", &prop, "NaN"),
            Err(FormError::InvalidNumber { .. })
        ));
        assert!(matches!(
            coerce("guidance", &prop, "lots"),
            Err(FormError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let prop = property("integer", Some(256.0), Some(2048.0));
        assert_eq!(coerce("height", &prop, "256").unwrap(), FieldValue::Integer(256));
        assert_eq!(coerce("height", &prop, "2048").unwrap(), FieldValue::Integer(2048));

        let err = coerce("height", &prop, "4096").unwrap_err();
        assert_eq!(err.to_string(), "height must be between 256 and 2048");
        assert!(matches!(
            coerce("height", &prop, "100"),
            Err(FormError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_one_sided_bound_message() {
        let prop = property("number", None, Some(1.0));
        let err = coerce("strength", &prop, "1.5").unwrap_err();
        assert_eq!(err.to_string(), "strength must be at most 1");
    }

    #[test]
    fn test_json_kinds_keep_their_type() {
        let upscale = property("boolean", None, None);
        assert_eq!(coerce("upscale", &upscale, "false").unwrap(), FieldValue::Json(json!(false)));
        assert_eq!(coerce("upscale", &upscale, " true ").unwrap().to_json(), json!(true));

        let mask = property("array", None, None);
        assert_eq!(coerce("mask", &mask, "[1,2]").unwrap().to_json(), json!([1, 2]));

        let extra = property("object", None, None);
        assert_eq!(
            coerce("extra", &extra, r#"{"a":1}"#).unwrap().to_json(),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_json_kind_mismatch_is_rejected() {
        let upscale = property("boolean", None, None);
        let err = coerce("upscale", &upscale, "yes").unwrap_err();
        assert_eq!(err.to_string(), r#"upscale must be boolean JSON, got "yes""#);

        let mask = property("array", None, None);
        assert!(matches!(
            coerce("mask", &mask, "{}"),
            Err(FormError::InvalidJson { expected: "array", .. })
        ));
    }

    #[test]
    fn test_raw_from_default() {
        assert_eq!(raw_from_default(&json!("a photo")), "a photo");
        assert_eq!(raw_from_default(&json!(20)), "20");
        assert_eq!(raw_from_default(&json!(7.5)), "7.5");
        assert_eq!(raw_from_default(&json!(true)), "true");
        assert_eq!(raw_from_default(&Value::Null), "");
    }

    #[test]
    fn test_to_json() {
        assert_eq!(FieldValue::Text("x".to_string()).to_json(), json!("x"));
        assert_eq!(FieldValue::Integer(20).to_json(), json!(20));
        assert_eq!(FieldValue::Number(7.5).to_json(), json!(7.5));
    }
}
