//! Tests for tool definition parsing

use serde_json::json;
use tmcp_domain::{InputSchema, PropertySchema, ToolDefinition};

#[test]
fn test_definition_deserializes_from_file_format() {
    let definition: ToolDefinition = serde_json::from_value(json!({
        "tasker_name": "MCP Flashlight",
        "name": "tasker_flashlight",
        "description": "Toggle the flashlight",
        "inputSchema": {
            "type": "object",
            "properties": { "state": { "type": "string", "description": "on or off" } },
            "required": ["state"]
        }
    }))
    .expect("definition should parse");

    assert_eq!(definition.tasker_name, "MCP Flashlight");
    assert_eq!(definition.name, "tasker_flashlight");
    assert_eq!(definition.description, "Toggle the flashlight");
    assert!(definition.input_schema.is_required("state"));
    assert_eq!(
        definition.input_schema.properties().get("state"),
        Some(&PropertySchema::new("string", "on or off"))
    );
}

#[test]
fn test_description_and_schema_are_optional() {
    let definition: ToolDefinition = serde_json::from_value(json!({
        "tasker_name": "MCP Battery",
        "name": "tasker_battery"
    }))
    .expect("definition should parse");

    assert_eq!(definition.description, "");
    assert!(definition.input_schema.is_empty());
}

#[test]
fn test_null_input_schema_is_empty() {
    let definition: ToolDefinition = serde_json::from_value(json!({
        "tasker_name": "MCP Battery",
        "name": "tasker_battery",
        "description": "",
        "inputSchema": null
    }))
    .expect("definition should parse");

    assert_eq!(definition.input_schema, InputSchema::default());
}

#[test]
fn test_missing_names_are_rejected() {
    let missing_tasker_name = serde_json::from_value::<ToolDefinition>(json!({
        "name": "tasker_battery"
    }));
    let numeric_name = serde_json::from_value::<ToolDefinition>(json!({
        "tasker_name": "MCP Battery",
        "name": 3
    }));

    assert!(missing_tasker_name.is_err());
    assert!(numeric_name.is_err());
}

#[test]
fn test_definition_serializes_to_file_format() {
    let definition = ToolDefinition::new("MCP Volume", "tasker_volume", "Set volume")
        .with_input_schema(
            InputSchema::new()
                .with_property("level", PropertySchema::new("number", "Volume level"))
                .with_required("level"),
        );

    let value = serde_json::to_value(&definition).expect("serializes");

    assert_eq!(
        value,
        json!({
            "tasker_name": "MCP Volume",
            "name": "tasker_volume",
            "description": "Set volume",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "level": { "type": "number", "description": "Volume level" }
                },
                "required": ["level"]
            }
        })
    );
}

#[test]
fn test_empty_schema_serializes_without_required() {
    let value = InputSchema::new().to_value();

    assert_eq!(value, json!({ "type": "object", "properties": {} }));
}
