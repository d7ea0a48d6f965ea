//! Tool descriptor value objects

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{SCHEMA_TYPE_NUMBER, SCHEMA_TYPE_OBJECT, SCHEMA_TYPE_STRING};
use crate::entities::ToolDefinition;
use crate::translator::translate;

/// Argument kinds advertised to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Free text
    String,
    /// Numeric value
    Number,
}

impl PrimitiveKind {
    /// JSON schema `type` for this kind
    pub fn as_schema_type(self) -> &'static str {
        match self {
            Self::String => SCHEMA_TYPE_STRING,
            Self::Number => SCHEMA_TYPE_NUMBER,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_schema_type())
    }
}

/// Outcome of resolving a schema `type` string
///
/// Anything other than `"string"` or `"number"` (including a missing type)
/// is accepted and treated as a string argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeResolution {
    /// `"string"`
    String,
    /// `"number"`
    Number,
    /// Any other or missing type
    UnknownFallsBackToString,
}

impl TypeResolution {
    /// Resolve a declared schema type
    pub fn resolve(schema_type: Option<&str>) -> Self {
        match schema_type {
            Some(SCHEMA_TYPE_STRING) => Self::String,
            Some(SCHEMA_TYPE_NUMBER) => Self::Number,
            _ => Self::UnknownFallsBackToString,
        }
    }

    /// Primitive kind the resolution maps to
    pub fn kind(self) -> PrimitiveKind {
        match self {
            Self::String | Self::UnknownFallsBackToString => PrimitiveKind::String,
            Self::Number => PrimitiveKind::Number,
        }
    }

    /// Whether the declared type was not recognised
    pub fn is_fallback(self) -> bool {
        self == Self::UnknownFallsBackToString
    }
}

/// One typed argument of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Argument name
    pub name: String,
    /// Argument kind
    pub kind: PrimitiveKind,
    /// Whether callers must supply the argument
    pub required: bool,
    /// Argument description, empty when none was declared
    pub description: String,
    /// Allowed values, empty when unrestricted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

impl PropertyDescriptor {
    fn schema_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::from(self.kind.as_schema_type()));
        if !self.description.is_empty() {
            object.insert(
                "description".to_string(),
                Value::from(self.description.as_str()),
            );
        }
        if !self.enum_values.is_empty() {
            object.insert(
                "enum".to_string(),
                Value::Array(self.enum_values.iter().cloned().map(Value::from).collect()),
            );
        }
        Value::Object(object)
    }
}

/// Protocol-facing description of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// External tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Arguments, ordered by name
    pub properties: Vec<PropertyDescriptor>,
}

impl ToolDescriptor {
    /// Translate a definition into its descriptor
    pub fn from_definition(definition: &ToolDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            description: definition.description.clone(),
            properties: translate(&definition.input_schema),
        }
    }

    /// Look up an argument by name
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of required arguments, in property order
    pub fn required_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// JSON schema object advertised in `tools/list`
    ///
    /// `required` is omitted when no argument is required.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from(SCHEMA_TYPE_OBJECT));
        schema.insert(
            "properties".to_string(),
            Value::Object(
                self.properties
                    .iter()
                    .map(|p| (p.name.clone(), p.schema_value()))
                    .collect(),
            ),
        );
        let required = self.required_names();
        if !required.is_empty() {
            schema.insert(
                "required".to_string(),
                Value::Array(required.into_iter().map(Value::from).collect()),
            );
        }
        schema
    }
}
