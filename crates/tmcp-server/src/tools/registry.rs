//! Tool Registry Module
//!
//! Builds one tool per definition and keeps them, in definition order, for
//! listing and dispatch. The registry is read-only once built.

use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use rmcp::model::Tool;
use tracing::{debug, info};

use tmcp_domain::ToolDefinition;
use tmcp_domain::error::{Error, Result};
use tmcp_domain::ports::SharedTaskBackend;

use crate::handlers::TaskToolHandler;

/// Registered tool: its protocol description and its handler
struct RegisteredTool {
    tool: Tool,
    handler: Arc<TaskToolHandler>,
}

/// Registry of Tasker-backed tools
pub struct ToolRegistry {
    entries: Vec<RegisteredTool>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Register every definition against `backend`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDefinition`] for an empty tool or task name
    /// - [`Error::DuplicateTool`] when two definitions share a tool name
    pub fn build(definitions: Vec<ToolDefinition>, backend: SharedTaskBackend) -> Result<Self> {
        let mut entries = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            validate_definition(&definition)?;

            match by_name.entry(definition.name.clone()) {
                Entry::Occupied(_) => return Err(Error::duplicate_tool(definition.name)),
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                }
            }

            let handler = Arc::new(TaskToolHandler::new(definition, Arc::clone(&backend)));
            let tool = create_tool(&handler);
            debug!(
                tool = %tool.name,
                properties = handler.descriptor().properties.len(),
                "Registered tool"
            );
            entries.push(RegisteredTool { tool, handler });
        }

        info!(count = entries.len(), "Tool registry built");
        Ok(Self { entries, by_name })
    }

    /// Handler for `name`, if registered
    pub fn get(&self, name: &str) -> Option<Arc<TaskToolHandler>> {
        self.by_name
            .get(name)
            .map(|&index| Arc::clone(&self.entries[index].handler))
    }

    /// Protocol descriptions of every tool, in definition order
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|entry| entry.tool.clone()).collect()
    }

    /// Tool names, in definition order
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.handler.definition().name.as_str())
            .collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tools are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_definition(definition: &ToolDefinition) -> Result<()> {
    if definition.name.trim().is_empty() {
        return Err(Error::invalid_definition(format!(
            "tool for task '{}' has an empty name",
            definition.tasker_name
        )));
    }
    if definition.tasker_name.trim().is_empty() {
        return Err(Error::invalid_definition(format!(
            "tool '{}' has an empty tasker_name",
            definition.name
        )));
    }
    Ok(())
}

/// Create the protocol tool description
fn create_tool(handler: &TaskToolHandler) -> Tool {
    let definition = handler.definition();
    let description = (!definition.description.is_empty())
        .then(|| Cow::Owned(definition.description.clone()));

    Tool {
        name: Cow::Owned(definition.name.clone()),
        title: None,
        description,
        input_schema: Arc::new(handler.descriptor().input_schema()),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: Default::default(),
    }
}
