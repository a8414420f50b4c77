//! whoami MCP Server
//!
//! A Model Context Protocol server that exposes a single user's
//! personal-context records to agentic clients like Claude Desktop.
//!
//! # Usage
//!
//! ```bash
//! whoami-mcp [--data-dir <path>]
//! ```
//!
//! The launcher is expected to set the working directory to the
//! installation root; the data directory resolves relative to it.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `whoami_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use whoami_mcp::WhoamiServer;

/// MCP server for personal context
#[derive(Parser)]
#[command(name = "whoami-mcp")]
#[command(about = "MCP server for personal-context records")]
#[command(version)]
struct Args {
    /// Directory holding the per-category text files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("whoami_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(data_dir = ?args.data_dir, "Starting whoami-mcp server");

    let mut server = WhoamiServer::with_data_dir(args.data_dir);
    server.run().await?;

    Ok(())
}
