//! MCP Tool definitions
//!
//! The tool surface is generated from the category registry: every
//! category contributes one `get_<category>` tool (no arguments) and one
//! `update_<category>` tool (a single required `content` string). There
//! is no hand-written definition per category.

use serde::{Deserialize, Serialize};
use whoami_core::CategoryRegistry;

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Build the tool definitions for every category in the registry.
///
/// Definitions come out in registry order, read tool before write tool
/// for each category.
pub fn tool_definitions(registry: &CategoryRegistry) -> Vec<ToolDefinition> {
    let mut tools = Vec::with_capacity(registry.len() * 2);
    for category in registry.categories() {
        tools.push(ToolDefinition {
            name: category.read_tool_name(),
            description: category.read_description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        });
        tools.push(ToolDefinition {
            name: category.write_tool_name(),
            description: category.write_description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "content": {
                        "type": "string",
                        "description": format!(
                            "Replacement text for the {} record",
                            category.name
                        )
                    }
                },
                "required": ["content"]
            }),
        });
    }
    tools
}
