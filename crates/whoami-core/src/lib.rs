//! Core logic for the whoami personal-context server
//!
//! This crate holds the two protocol-free building blocks of the system:
//!
//! - [`CategoryRegistry`] - the fixed mapping from logical category names
//!   (e.g. `basic_info`) to the text file backing each category, plus the
//!   natural-language descriptions surfaced as tool metadata.
//! - [`ContextStore`] - the file-level accessor that reads and writes a
//!   category's backing file, absorbing all I/O failures into descriptive
//!   result strings.
//!
//! The MCP protocol surface lives in the `whoami-mcp` crate, which drives
//! both of these through a single parameterized dispatch routine.

pub mod registry;
pub mod store;

pub use registry::{Category, CategoryRegistry};
pub use store::ContextStore;
