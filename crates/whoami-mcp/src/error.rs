//! Error types for the MCP server
//!
//! These cover the protocol and dispatch layer only. Storage-level
//! failures never surface here: `whoami-core` absorbs them into
//! descriptive result strings.

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid tool arguments
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A registered tool name does not resolve to a registry category.
    /// This is a startup configuration fault, never a request-time one.
    #[error("no category registered for tool: {0}")]
    UnknownCategory(String),
}
