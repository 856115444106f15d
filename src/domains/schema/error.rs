//! Schema validation error types.

use serde_json::Value;
use thiserror::Error;

/// Errors produced when a value fails its schema check.
///
/// Validation failures are local and reportable: they are surfaced to the
/// caller before any network activity and never abort the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The value has the wrong JSON type for the declared kind.
    #[error("invalid value at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Path of the offending field, e.g. `$.order.items[2]`.
        path: String,
        /// Human description of the expected shape.
        expected: &'static str,
        /// JSON type name of the value that was supplied.
        found: &'static str,
    },

    /// A non-optional property is absent from the input object.
    #[error("missing required property `{name}` at {path}")]
    MissingProperty { path: String, name: String },

    /// The value is not a member of the declared literal set.
    #[error("value at {path} is not one of the allowed literals: {value}")]
    NotInEnum { path: String, value: String },

    /// None of the alternative shapes accepted the value.
    #[error("value at {path} matches none of the allowed shapes")]
    NoAlternative { path: String },
}

impl SchemaError {
    /// Create a type mismatch error for the given value.
    pub fn type_mismatch(path: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            found: json_type_name(found),
        }
    }

    /// Create a missing property error.
    pub fn missing_property(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingProperty {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Create an enum membership error.
    pub fn not_in_enum(path: impl Into<String>, value: &Value) -> Self {
        Self::NotInEnum {
            path: path.into(),
            value: value.to_string(),
        }
    }
}

/// JSON type name of a value, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
