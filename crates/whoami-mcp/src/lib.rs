//! MCP Server for personal context
//!
//! This crate exposes a single user's personal-context records via the
//! Model Context Protocol (MCP), so that agentic clients (like Claude
//! Desktop) can query and revise structured facts about the user.
//!
//! # Architecture
//!
//! The `whoami-mcp` crate acts as a protocol facade over `whoami-core`:
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ whoami-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ whoami-core (Registry + Store) ]
//!        |
//!        +--> [ data/ (one .txt per category) ]
//! ```
//!
//! # Tools
//!
//! For every category in the registry the server exposes one tool pair:
//! - `get_<category>` - read the stored record (no arguments)
//! - `update_<category>` - replace the stored record (one `content` string)
//!
//! The tool set is derived from the category registry at startup; there is
//! no per-category handler code.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::WhoamiServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, tool_definitions};
