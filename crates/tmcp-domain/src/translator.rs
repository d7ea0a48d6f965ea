//! Schema translation
//!
//! Turns a tool's [`InputSchema`] into the ordered argument list the
//! protocol layer advertises. Translation is total: malformed pieces of the
//! schema degrade to string arguments without descriptions instead of
//! failing the tool.

use crate::entities::InputSchema;
use crate::value_objects::{PropertyDescriptor, TypeResolution};

/// Translate an input schema into property descriptors
///
/// Properties come out sorted by name. A property is required exactly when
/// its name is listed in the schema's `required` set; required names without
/// a matching property are ignored.
pub fn translate(schema: &InputSchema) -> Vec<PropertyDescriptor> {
    schema
        .properties()
        .iter()
        .map(|(name, property)| PropertyDescriptor {
            name: name.clone(),
            kind: TypeResolution::resolve(property.schema_type.as_deref()).kind(),
            required: schema.is_required(name),
            description: property.description.clone().unwrap_or_default(),
            enum_values: property.enum_values.clone(),
        })
        .collect()
}
