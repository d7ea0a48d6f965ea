//! Tasker XML export conversion
//!
//! Builds tool definitions from a Tasker project or task export
//! (`TaskerData` root). Only tasks carrying a description (`pc`) become
//! tools. Their arguments come from task-level profile variables that are
//! immutable, not configured on import and have no preset value.

use roxmltree::{Document, Node};
use tracing::{debug, warn};

use tmcp_domain::constants::{SCHEMA_TYPE_NUMBER, SCHEMA_TYPE_STRING};
use tmcp_domain::error::{Error, Result};
use tmcp_domain::{InputSchema, PropertySchema, ToolDefinition};

const ROOT_ELEMENT: &str = "TaskerData";
const TASK_ELEMENT: &str = "Task";
const VARIABLE_ELEMENT: &str = "ProfileVariable";

/// Converts Tasker XML exports into tool definitions
pub struct TaskerXmlConverter;

impl TaskerXmlConverter {
    /// Convert an XML document into tool definitions, in document order
    pub fn convert(xml: &str) -> Result<Vec<ToolDefinition>> {
        let document = Document::parse(xml)
            .map_err(|e| Error::malformed_definitions(format!("invalid Tasker XML: {e}")))?;

        let root = document.root_element();
        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(Error::malformed_definitions(format!(
                "expected <{ROOT_ELEMENT}> root element, found <{}>",
                root.tag_name().name()
            )));
        }

        let definitions: Vec<ToolDefinition> = child_elements(root, TASK_ELEMENT)
            .filter_map(Self::convert_task)
            .collect();

        debug!(count = definitions.len(), "Converted Tasker tasks");
        Ok(definitions)
    }

    /// Convert and render as the pretty-printed definitions file
    pub fn convert_to_json(xml: &str) -> Result<String> {
        let definitions = Self::convert(xml)?;
        Ok(serde_json::to_string_pretty(&definitions)?)
    }

    fn convert_task(task: Node<'_, '_>) -> Option<ToolDefinition> {
        let description = child_text(task, "pc").filter(|pc| !pc.is_empty())?;
        let Some(task_name) = child_text(task, "nme").filter(|n| !n.is_empty()) else {
            warn!("Skipping described task without a name");
            return None;
        };

        let input_schema = child_elements(task, VARIABLE_ELEMENT)
            .filter(|variable| is_tool_argument(*variable))
            .fold(InputSchema::new(), add_argument);

        Some(
            ToolDefinition::new(task_name, tool_name_for_task(task_name), description)
                .with_input_schema(input_schema),
        )
    }
}

/// External tool name for a Tasker task name
///
/// Lower-cases the name, replaces spaces with underscores and swaps a
/// leading `mcp` marker for `tasker`.
pub fn tool_name_for_task(task_name: &str) -> String {
    let name = task_name.to_lowercase().replace(' ', "_");
    if let Some(rest) = name.strip_prefix("mcp_") {
        format!("tasker_{rest}")
    } else if let Some(rest) = name.strip_prefix("mcp") {
        format!("tasker{rest}")
    } else {
        name
    }
}

fn is_tool_argument(variable: Node<'_, '_>) -> bool {
    child_text(variable, "pvci") == Some("false")
        && child_text(variable, "immutable") == Some("true")
        && child_text(variable, "pvv").is_none_or(|value| value.trim().is_empty())
}

fn add_argument(schema: InputSchema, variable: Node<'_, '_>) -> InputSchema {
    let raw_name = child_text(variable, "pvn").unwrap_or_default();
    let name = raw_name.strip_prefix('%').unwrap_or(raw_name);
    if name.is_empty() {
        return schema;
    }

    let mut property = PropertySchema {
        schema_type: Some(SCHEMA_TYPE_STRING.to_string()),
        description: child_text(variable, "pvd")
            .filter(|d| !d.is_empty())
            .map(str::to_owned),
        enum_values: Vec::new(),
    };
    match child_text(variable, "pvt") {
        Some("n") => property.schema_type = Some(SCHEMA_TYPE_NUMBER.to_string()),
        Some("onoff") => property = property.with_enum(["on", "off"]),
        _ => {}
    }

    let schema = schema.with_property(name, property);
    if child_text(variable, "clearout") == Some("true") {
        schema.with_required(name)
    } else {
        schema
    }
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
        .map(|child| child.text().unwrap_or_default().trim())
}
