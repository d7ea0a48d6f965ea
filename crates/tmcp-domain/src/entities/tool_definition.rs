//! Tool definition entity and its typed input schema
//!
//! The definitions file describes each property with a loosely-typed JSON
//! schema. [`InputSchema`] is the typed intermediate representation built
//! from that JSON in a single lenient pass, so nothing downstream has to walk
//! generic maps again.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constants::SCHEMA_TYPE_OBJECT;

/// A Tasker task exposed as a tool
///
/// Field names follow the definitions file format:
///
/// ```json
/// {
///   "tasker_name": "MCP Flashlight",
///   "name": "tasker_flashlight",
///   "description": "Toggle the flashlight",
///   "inputSchema": {
///     "type": "object",
///     "properties": { "state": { "type": "string", "description": "on or off" } },
///     "required": ["state"]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Task name understood by the backend
    pub tasker_name: String,
    /// External tool name advertised to callers
    pub name: String,
    /// Free-form tool description
    #[serde(default)]
    pub description: String,
    /// Accepted arguments
    #[serde(default, rename = "inputSchema")]
    pub input_schema: InputSchema,
}

impl ToolDefinition {
    /// Create a definition with an empty input schema
    pub fn new(
        tasker_name: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tasker_name: tasker_name.into(),
            name: name.into(),
            description: description.into(),
            input_schema: InputSchema::default(),
        }
    }

    /// Replace the input schema
    pub fn with_input_schema(mut self, input_schema: InputSchema) -> Self {
        self.input_schema = input_schema;
        self
    }
}

/// Top-level object schema of a tool
///
/// Only flat properties are kept; nested objects and arrays are never
/// recursed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSchema {
    properties: BTreeMap<String, PropertySchema>,
    required: BTreeSet<String>,
}

impl InputSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the schema from arbitrary JSON
    ///
    /// Never fails: a value that is not an object yields an empty schema,
    /// `required` entries that are not strings are dropped and property
    /// entries that are not objects become untyped properties.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let required = object
            .get("required")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let properties = object
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, raw)| (name.clone(), PropertySchema::from_value(raw)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            properties,
            required,
        }
    }

    /// Add a property
    pub fn with_property(mut self, name: impl Into<String>, property: PropertySchema) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Mark a name as required
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.insert(name.into());
        self
    }

    /// Properties keyed by name, in name order
    pub fn properties(&self) -> &BTreeMap<String, PropertySchema> {
        &self.properties
    }

    /// Names listed as required
    ///
    /// May contain names that have no matching property.
    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Whether `name` is listed as required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Whether the schema declares no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render back to the definitions file JSON shape
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::from(SCHEMA_TYPE_OBJECT));
        object.insert(
            "properties".to_string(),
            Value::Object(
                self.properties
                    .iter()
                    .map(|(name, property)| (name.clone(), property.to_value()))
                    .collect(),
            ),
        );
        if !self.required.is_empty() {
            object.insert(
                "required".to_string(),
                Value::Array(self.required.iter().cloned().map(Value::from).collect()),
            );
        }
        Value::Object(object)
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InputSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Schema of a single flat property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySchema {
    /// Declared `type`, if it was a string
    pub schema_type: Option<String>,
    /// Declared `description`, if it was a string
    pub description: Option<String>,
    /// Allowed values, if the property is an enumeration
    pub enum_values: Vec<String>,
}

impl PropertySchema {
    /// Create a property with the given type and description
    pub fn new(schema_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            description: Some(description.into()),
            enum_values: Vec::new(),
        }
    }

    /// Restrict the property to a set of values
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Build a property from arbitrary JSON, keeping only well-typed fields
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            schema_type: object
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_owned),
            description: object
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
            enum_values: object
                .get("enum")
                .and_then(Value::as_array)
                .map(|values| {
                    values
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Render back to the definitions file JSON shape
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        if let Some(schema_type) = &self.schema_type {
            object.insert("type".to_string(), Value::from(schema_type.as_str()));
        }
        if let Some(description) = &self.description {
            object.insert("description".to_string(), Value::from(description.as_str()));
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
