//! Declarative schema descriptors.
//!
//! A [`SchemaNode`] describes the expected shape of one value: its kind,
//! nullability, optionality, literal restrictions, and nested shape for
//! arrays and objects. Trees are built once at startup from the endpoint
//! catalog and are read-only thereafter.

use serde_json::{Map, Value, json};

/// The kind tag of a schema node.
///
/// Dispatch over this enum is always an exhaustive match; there is no
/// reflective or duck-typed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// A UTF-8 string.
    String,
    /// A whole number.
    Integer,
    /// Any finite number.
    Number,
    /// A boolean.
    Boolean,
    /// A homogeneous list; element shape in `items`.
    Array,
    /// A string-keyed mapping; declared shape in `properties`, or an open
    /// record when `properties` is absent.
    Object,
    /// Anything; the value passes through unchanged.
    Any,
}

impl SchemaKind {
    /// JSON Schema type keyword for this kind, if it has one.
    pub fn type_keyword(self) -> Option<&'static str> {
        match self {
            Self::String => Some("string"),
            Self::Integer => Some("integer"),
            Self::Number => Some("number"),
            Self::Boolean => Some("boolean"),
            Self::Array => Some("array"),
            Self::Object => Some("object"),
            Self::Any => None,
        }
    }
}

/// A declarative description of one value's shape.
///
/// Invariant: `items` is set iff `kind` is [`SchemaKind::Array`];
/// `properties` is set iff `kind` is [`SchemaKind::Object`]. The builder
/// constructors are the only way these fields are populated, which keeps the
/// invariant by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// The kind tag driving validation dispatch.
    pub kind: SchemaKind,
    /// Element shape for arrays.
    pub items: Option<Box<SchemaNode>>,
    /// Ordered property declarations for objects. `None` on an object means
    /// "accept any string-keyed mapping".
    pub properties: Option<Vec<(String, SchemaNode)>>,
    /// Whether an explicit null is also accepted.
    pub nullable: bool,
    /// Whether the field may be absent when used as an object property.
    pub optional: bool,
    /// Restricts acceptance to this literal set, regardless of `kind`.
    pub enum_values: Option<Vec<Value>>,
    /// Substituted when the field is absent from the input object.
    pub default: Option<Value>,
    /// Alternative shapes; the value is accepted if any one accepts it.
    pub any_of: Option<Vec<SchemaNode>>,
    /// Human description, forwarded into the emitted JSON Schema.
    pub description: Option<String>,
}

impl SchemaNode {
    fn with_kind(kind: SchemaKind) -> Self {
        Self {
            kind,
            items: None,
            properties: None,
            nullable: false,
            optional: false,
            enum_values: None,
            default: None,
            any_of: None,
            description: None,
        }
    }

    /// A string value.
    pub fn string() -> Self {
        Self::with_kind(SchemaKind::String)
    }

    /// A whole number.
    pub fn integer() -> Self {
        Self::with_kind(SchemaKind::Integer)
    }

    /// Any finite number.
    pub fn number() -> Self {
        Self::with_kind(SchemaKind::Number)
    }

    /// A boolean.
    pub fn boolean() -> Self {
        Self::with_kind(SchemaKind::Boolean)
    }

    /// Any value, passed through unchanged.
    pub fn any() -> Self {
        Self::with_kind(SchemaKind::Any)
    }

    /// A homogeneous array of `items`.
    pub fn array(items: SchemaNode) -> Self {
        let mut node = Self::with_kind(SchemaKind::Array);
        node.items = Some(Box::new(items));
        node
    }

    /// An object with the given ordered property declarations.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        let mut node = Self::with_kind(SchemaKind::Object);
        node.properties = Some(
            properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
        );
        node
    }

    /// An open record: any string-keyed mapping of arbitrary values.
    pub fn open_object() -> Self {
        Self::with_kind(SchemaKind::Object)
    }

    /// A value accepted by any one of the given alternatives.
    pub fn one_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = SchemaNode>,
    {
        let mut node = Self::with_kind(SchemaKind::Any);
        node.any_of = Some(alternatives.into_iter().collect());
        node
    }

    /// Widen the node to also accept an explicit null.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark the node as allowed to be absent when used as a property.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Restrict acceptance to the given literal set.
    pub fn enum_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Substitute this value when the field is absent.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Attach a human description for the emitted JSON Schema.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Look up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .as_ref()
            .and_then(|props| props.iter().find(|(n, _)| n == name))
            .map(|(_, schema)| schema)
    }

    /// Render this node as a JSON Schema document.
    ///
    /// Used to advertise tool input shapes to MCP clients. The rendering is
    /// lossless for everything clients act on: type, items, properties,
    /// required names, enum, default, nullability (as a type array), and
    /// anyOf alternatives.
    pub fn to_json_schema(&self) -> Value {
        let mut doc = Map::new();

        if let Some(alternatives) = &self.any_of {
            doc.insert(
                "anyOf".to_string(),
                Value::Array(alternatives.iter().map(Self::to_json_schema).collect()),
            );
            if let Some(text) = &self.description {
                doc.insert("description".to_string(), json!(text));
            }
            return Value::Object(doc);
        }

        if let Some(keyword) = self.kind.type_keyword() {
            if self.nullable {
                doc.insert("type".to_string(), json!([keyword, "null"]));
            } else {
                doc.insert("type".to_string(), json!(keyword));
            }
        }

        match self.kind {
            SchemaKind::Array => {
                let items = self
                    .items
                    .as_deref()
                    .map(Self::to_json_schema)
                    .unwrap_or_else(|| json!({ "type": "string" }));
                doc.insert("items".to_string(), items);
            }
            SchemaKind::Object => {
                if let Some(props) = &self.properties {
                    let mut rendered = Map::new();
                    let mut required = Vec::new();
                    for (name, schema) in props {
                        rendered.insert(name.clone(), schema.to_json_schema());
                        if !schema.optional {
                            required.push(json!(name));
                        }
                    }
                    doc.insert("properties".to_string(), Value::Object(rendered));
                    if !required.is_empty() {
                        doc.insert("required".to_string(), Value::Array(required));
                    }
                } else {
                    doc.insert("additionalProperties".to_string(), json!(true));
                }
            }
            _ => {}
        }

        if let Some(values) = &self.enum_values {
            doc.insert("enum".to_string(), Value::Array(values.clone()));
        }
        if let Some(value) = &self.default {
            doc.insert("default".to_string(), value.clone());
        }
        if let Some(text) = &self.description {
            doc.insert("description".to_string(), json!(text));
        }

        Value::Object(doc)
    }

    /// Render the top-level input schema of a tool as a JSON object map.
    ///
    /// MCP clients expect `inputSchema` to be an object document even when a
    /// tool takes no parameters.
    pub fn input_schema_object(&self) -> Map<String, Value> {
        match self.to_json_schema() {
            Value::Object(map) if !map.is_empty() => map,
            _ => {
                let mut map = Map::new();
                map.insert("type".to_string(), json!("object"));
                map
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_keep_shape_invariant() {
        let array = SchemaNode::array(SchemaNode::integer());
        assert_eq!(array.kind, SchemaKind::Array);
        assert!(array.items.is_some());
        assert!(array.properties.is_none());

        let object = SchemaNode::object([("id", SchemaNode::string())]);
        assert_eq!(object.kind, SchemaKind::Object);
        assert!(object.properties.is_some());
        assert!(object.items.is_none());

        let open = SchemaNode::open_object();
        assert!(open.properties.is_none());
    }

    #[test]
    fn test_property_lookup() {
        let schema = SchemaNode::object([
            ("id", SchemaNode::string()),
            ("count", SchemaNode::integer().optional()),
        ]);
        assert!(schema.property("id").is_some());
        assert!(schema.property("count").is_some());
        assert!(schema.property("missing").is_none());
    }

    #[test]
    fn test_json_schema_object_with_required() {
        let schema = SchemaNode::object([
            ("email", SchemaNode::string()),
            ("note", SchemaNode::string().optional()),
        ]);
        let doc = schema.to_json_schema();
        assert_eq!(doc["type"], json!("object"));
        assert_eq!(doc["properties"]["email"]["type"], json!("string"));
        assert_eq!(doc["required"], json!(["email"]));
    }

    #[test]
    fn test_json_schema_nullable_type_array() {
        let doc = SchemaNode::string().nullable().to_json_schema();
        assert_eq!(doc["type"], json!(["string", "null"]));
    }

    #[test]
    fn test_json_schema_array_defaults_to_string_items() {
        let mut bare = SchemaNode::with_kind(SchemaKind::Array);
        bare.items = None;
        let doc = bare.to_json_schema();
        assert_eq!(doc["items"]["type"], json!("string"));
    }

    #[test]
    fn test_json_schema_enum_and_default() {
        let doc = SchemaNode::string()
            .enum_of(["ARS", "USD"])
            .default_value("ARS")
            .to_json_schema();
        assert_eq!(doc["enum"], json!(["ARS", "USD"]));
        assert_eq!(doc["default"], json!("ARS"));
    }

    #[test]
    fn test_json_schema_any_of() {
        let doc = SchemaNode::one_of([SchemaNode::string(), SchemaNode::integer()]).to_json_schema();
        let alternatives = doc["anyOf"].as_array().unwrap();
        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0]["type"], json!("string"));
        assert_eq!(alternatives[1]["type"], json!("integer"));
    }

    #[test]
    fn test_input_schema_object_never_empty() {
        let map = SchemaNode::any().input_schema_object();
        assert_eq!(map.get("type"), Some(&json!("object")));
    }
}
