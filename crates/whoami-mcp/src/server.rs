//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with the
//! category registry and context store.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde_json::{Value, json};

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, tool_definitions};
use crate::{Error, Result};

/// One-paragraph self-description surfaced to clients at initialize time.
const SERVER_INSTRUCTIONS: &str = "Comprehensive personal context server providing detailed \
    information about the user across multiple categories including identity, work, \
    preferences, schedule, projects, and technical expertise.";

/// MCP Server for personal context
///
/// Exposes one `get_`/`update_` tool pair per registered category over
/// JSON-RPC 2.0 on stdio.
///
/// # Example
///
/// ```ignore
/// use whoami_mcp::WhoamiServer;
/// use std::path::PathBuf;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = WhoamiServer::with_data_dir(PathBuf::from("data"));
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct WhoamiServer {
    /// Fixed category set, built at construction and never mutated
    registry: whoami_core::CategoryRegistry,

    /// File-backed store for category records
    store: whoami_core::ContextStore,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools, derived from the registry at initialization
    tools: Vec<ToolDefinition>,
}

impl WhoamiServer {
    /// Create a server from an explicit registry and store.
    pub fn new(registry: whoami_core::CategoryRegistry, store: whoami_core::ContextStore) -> Self {
        Self {
            registry,
            store,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Create a server with the builtin categories over `data_dir`.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self::new(
            whoami_core::CategoryRegistry::with_builtins(),
            whoami_core::ContextStore::new(data_dir),
        )
    }

    /// Initialize the server
    ///
    /// Derives the tool definitions from the registry and verifies that
    /// every tool name resolves back to a registered category. A failure
    /// here is a configuration fault and aborts startup.
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(data_dir = ?self.store.data_dir(), "Initializing MCP server");

        self.tools = tool_definitions(&self.registry);

        for tool in &self.tools {
            let suffix = tool
                .name
                .strip_prefix("get_")
                .or_else(|| tool.name.strip_prefix("update_"))
                .ok_or_else(|| Error::UnknownCategory(tool.name.clone()))?;
            if self.registry.get(suffix).is_none() {
                return Err(Error::UnknownCategory(tool.name.clone()));
            }
        }

        self.initialized = true;
        Ok(())
    }

    /// Run the MCP server
    ///
    /// Processes line-delimited JSON-RPC messages from stdin, writing
    /// responses to stdout. Logs go to stderr so the protocol stream
    /// stays clean.
    pub async fn run(&mut self) -> Result<()> {
        self.initialize()?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Parses the JSON-RPC request and dispatches to the appropriate
    /// handler. Returns the response as a string, or an empty string for
    /// notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" => return Ok(String::new()), // Notification, no response
            "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id)?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "whoami".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let tools_value: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        Ok(JsonRpcResponse::success(id, json!({ "tools": tools_value })))
    }

    /// Handle tools/call request
    ///
    /// Storage outcomes (content, sentinel, status) come back as plain
    /// text results; only dispatch failures produce an `is_error` result.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(
            &self.store,
            &self.registry,
            &tool_params.name,
            tool_params.arguments,
        )
        .await
        {
            Ok(text) => {
                let tool_result = ToolResult::text(text);
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
            Err(e) => {
                let tool_result = ToolResult::error(format!("{}", e));
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
        }
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
