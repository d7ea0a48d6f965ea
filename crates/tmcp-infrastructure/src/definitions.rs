//! Tool definitions loader
//!
//! Reads the JSON definitions file once at startup. Loading is all or
//! nothing: a single malformed entry fails the whole file.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tmcp_domain::ToolDefinition;
use tmcp_domain::error::{Error, Result};
use tracing::{debug, info};

/// Loader for the tool definitions file
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Load definitions from a file
    ///
    /// # Errors
    ///
    /// - [`Error::DefinitionsNotFound`] when the file does not exist
    /// - [`Error::Io`] when the file cannot be read
    /// - [`Error::MalformedDefinitions`] when the content is not an array of
    ///   tool definition objects
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ToolDefinition>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::definitions_not_found(path),
            _ => Error::io_with_source(
                format!("Failed to read tool definitions from {}", path.display()),
                e,
            ),
        })?;

        let definitions = Self::parse(&content)?;
        info!(
            path = %path.display(),
            count = definitions.len(),
            "Loaded tool definitions"
        );
        Ok(definitions)
    }

    /// Parse definitions from JSON text
    pub fn parse(content: &str) -> Result<Vec<ToolDefinition>> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::malformed_definitions(format!("invalid JSON: {e}")))?;

        let Value::Array(entries) = value else {
            return Err(Error::malformed_definitions(
                "top-level value must be an array of tool definitions",
            ));
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if !entry.is_object() {
                    return Err(Error::malformed_definitions(format!(
                        "entry {index} is not an object"
                    )));
                }
                let definition: ToolDefinition = serde_json::from_value(entry)
                    .map_err(|e| Error::malformed_definitions(format!("entry {index}: {e}")))?;
                debug!(
                    tool = %definition.name,
                    task = %definition.tasker_name,
                    properties = definition.input_schema.properties().len(),
                    "Parsed tool definition"
                );
                Ok(definition)
            })
            .collect()
    }
}
