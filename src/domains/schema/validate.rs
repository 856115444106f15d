//! Recursive validation over [`SchemaNode`] trees.
//!
//! Validation accepts a value and returns the accepted (possibly coerced)
//! value, or a [`SchemaError`] carrying the offending field path. The only
//! coercion performed is default substitution for absent object properties;
//! accepted values are otherwise returned unchanged.

use serde_json::{Map, Value};

use super::error::SchemaError;
use super::node::{SchemaKind, SchemaNode};

impl SchemaNode {
    /// Validate a value against this schema.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first field that fails its
    /// check, with a path rooted at `$`.
    pub fn validate(&self, value: &Value) -> Result<Value, SchemaError> {
        self.validate_at("$", value)
    }

    fn validate_at(&self, path: &str, value: &Value) -> Result<Value, SchemaError> {
        // Alternatives are a short-circuit OR: first accepting shape wins.
        if let Some(alternatives) = &self.any_of {
            for alternative in alternatives {
                if let Ok(accepted) = alternative.validate_at(path, value) {
                    return Ok(accepted);
                }
            }
            return Err(SchemaError::NoAlternative {
                path: path.to_string(),
            });
        }

        if value.is_null() && self.nullable {
            return Ok(Value::Null);
        }

        // The literal set restricts acceptance regardless of kind.
        if let Some(allowed) = &self.enum_values {
            return if allowed.contains(value) {
                Ok(value.clone())
            } else {
                Err(SchemaError::not_in_enum(path, value))
            };
        }

        match self.kind {
            SchemaKind::Any => Ok(value.clone()),
            SchemaKind::Boolean => {
                if value.is_boolean() {
                    Ok(value.clone())
                } else {
                    Err(SchemaError::type_mismatch(path, "a boolean", value))
                }
            }
            SchemaKind::Integer => {
                let whole = value.as_i64().is_some()
                    || value.as_u64().is_some()
                    || value.as_f64().is_some_and(|f| f.fract() == 0.0);
                if whole {
                    Ok(value.clone())
                } else {
                    Err(SchemaError::type_mismatch(path, "a whole number", value))
                }
            }
            SchemaKind::Number => {
                if value.is_number() {
                    Ok(value.clone())
                } else {
                    Err(SchemaError::type_mismatch(path, "a number", value))
                }
            }
            SchemaKind::Array => self.validate_array(path, value),
            SchemaKind::Object => self.validate_object(path, value),
            SchemaKind::String => {
                if value.is_string() {
                    Ok(value.clone())
                } else {
                    Err(SchemaError::type_mismatch(path, "a string", value))
                }
            }
        }
    }

    fn validate_array(&self, path: &str, value: &Value) -> Result<Value, SchemaError> {
        let Some(elements) = value.as_array() else {
            return Err(SchemaError::type_mismatch(path, "an array", value));
        };

        // Bare arrays (no declared item shape) validate elements as strings.
        let fallback = SchemaNode::string();
        let item_schema = self.items.as_deref().unwrap_or(&fallback);

        let mut accepted = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            accepted.push(item_schema.validate_at(&format!("{path}[{index}]"), element)?);
        }
        Ok(Value::Array(accepted))
    }

    fn validate_object(&self, path: &str, value: &Value) -> Result<Value, SchemaError> {
        let Some(entries) = value.as_object() else {
            return Err(SchemaError::type_mismatch(path, "an object", value));
        };

        // No declared properties: open record, accepted unchanged.
        let Some(declared) = &self.properties else {
            return Ok(value.clone());
        };

        // Undeclared keys pass through; declared ones are checked in order,
        // with defaults filled in for absent properties.
        let mut accepted: Map<String, Value> = entries.clone();
        for (name, schema) in declared {
            match entries.get(name) {
                Some(present) => {
                    let checked = schema.validate_at(&format!("{path}.{name}"), present)?;
                    accepted.insert(name.clone(), checked);
                }
                None => {
                    if let Some(default) = &schema.default {
                        accepted.insert(name.clone(), default.clone());
                    } else if !schema.optional {
                        return Err(SchemaError::missing_property(path, name));
                    }
                }
            }
        }
        Ok(Value::Object(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_any_accepts_everything() {
        let schema = SchemaNode::any();
        for value in [json!(null), json!(true), json!(3.5), json!("x"), json!([1]), json!({})] {
            assert_eq!(schema.validate(&value).unwrap(), value);
        }
    }

    #[test]
    fn test_string_rejects_number() {
        let err = SchemaNode::string().validate(&json!(7)).unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: "$".to_string(),
                expected: "a string",
                found: "number"
            }
        );
    }

    #[test]
    fn test_integer_requires_whole_number() {
        let schema = SchemaNode::integer();
        assert!(schema.validate(&json!(42)).is_ok());
        assert!(schema.validate(&json!(-3)).is_ok());
        assert!(schema.validate(&json!(2.0)).is_ok());
        assert!(schema.validate(&json!(2.5)).is_err());
        assert!(schema.validate(&json!("42")).is_err());
    }

    #[test]
    fn test_number_accepts_fractions() {
        let schema = SchemaNode::number();
        assert!(schema.validate(&json!(2.5)).is_ok());
        assert!(schema.validate(&json!(7)).is_ok());
        assert!(schema.validate(&json!(true)).is_err());
    }

    #[test]
    fn test_boolean() {
        let schema = SchemaNode::boolean();
        assert!(schema.validate(&json!(false)).is_ok());
        assert!(schema.validate(&json!(0)).is_err());
    }

    #[test]
    fn test_nullable_widens() {
        assert!(SchemaNode::string().validate(&json!(null)).is_err());
        assert_eq!(
            SchemaNode::string().nullable().validate(&json!(null)).unwrap(),
            json!(null)
        );
    }

    #[test]
    fn test_enum_restricts_regardless_of_kind() {
        let schema = SchemaNode::string().enum_of(["ARS", "USD"]);
        assert!(schema.validate(&json!("ARS")).is_ok());
        let err = schema.validate(&json!("EUR")).unwrap_err();
        assert!(matches!(err, SchemaError::NotInEnum { .. }));

        // Membership is checked against the literal set, not the kind tag.
        let numeric = SchemaNode::string().enum_of([json!(1), json!(2)]);
        assert!(numeric.validate(&json!(2)).is_ok());
    }

    #[test]
    fn test_array_validates_every_element() {
        let schema = SchemaNode::array(SchemaNode::integer());
        assert!(schema.validate(&json!([1, 2, 3])).is_ok());
        let err = schema.validate(&json!([1, "two", 3])).unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: "$[1]".to_string(),
                expected: "a whole number",
                found: "string"
            }
        );
    }

    #[test]
    fn test_bare_array_defaults_to_string_elements() {
        let mut bare = SchemaNode::array(SchemaNode::string());
        bare.items = None;
        assert!(bare.validate(&json!(["a", "b"])).is_ok());
        assert!(bare.validate(&json!([1])).is_err());
    }

    #[test]
    fn test_object_requires_non_optional_properties() {
        let schema = SchemaNode::object([
            ("email", SchemaNode::string()),
            ("note", SchemaNode::string().optional()),
        ]);
        assert!(schema.validate(&json!({ "email": "a@b.com" })).is_ok());
        let err = schema.validate(&json!({ "note": "hi" })).unwrap_err();
        assert_eq!(err, SchemaError::missing_property("$", "email"));
    }

    #[test]
    fn test_object_fills_defaults() {
        let schema = SchemaNode::object([
            ("page", SchemaNode::integer().default_value(1)),
            ("q", SchemaNode::string()),
        ]);
        let accepted = schema.validate(&json!({ "q": "boots" })).unwrap();
        assert_eq!(accepted["page"], json!(1));
        assert_eq!(accepted["q"], json!("boots"));
    }

    #[test]
    fn test_object_passes_undeclared_keys_through() {
        let schema = SchemaNode::object([("id", SchemaNode::string())]);
        let accepted = schema.validate(&json!({ "id": "x", "extra": 9 })).unwrap();
        assert_eq!(accepted["extra"], json!(9));
    }

    #[test]
    fn test_open_object_accepts_any_mapping() {
        let schema = SchemaNode::open_object();
        assert!(schema.validate(&json!({ "a": 1, "b": [true] })).is_ok());
        assert!(schema.validate(&json!("not a map")).is_err());
    }

    #[test]
    fn test_nested_error_path() {
        let schema = SchemaNode::object([(
            "order",
            SchemaNode::object([("items", SchemaNode::array(SchemaNode::string()))]),
        )]);
        let err = schema
            .validate(&json!({ "order": { "items": ["ok", 5] } }))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: "$.order.items[1]".to_string(),
                expected: "a string",
                found: "number"
            }
        );
    }

    #[test]
    fn test_any_of_short_circuits() {
        let schema = SchemaNode::one_of([SchemaNode::integer(), SchemaNode::string()]);
        assert!(schema.validate(&json!(3)).is_ok());
        assert!(schema.validate(&json!("three")).is_ok());
        let err = schema.validate(&json!(true)).unwrap_err();
        assert!(matches!(err, SchemaError::NoAlternative { .. }));
    }

    #[test]
    fn test_any_of_with_object_alternative() {
        let schema = SchemaNode::one_of([
            SchemaNode::string(),
            SchemaNode::object([("email", SchemaNode::string())]),
        ]);
        assert!(schema.validate(&json!("payer-1")).is_ok());
        assert!(schema.validate(&json!({ "email": "a@b.com" })).is_ok());
        assert!(schema.validate(&json!({ "email": 5 })).is_err());
    }
}
