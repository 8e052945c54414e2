//! Host Telemetry MCP Library
//!
//! Exposes host telemetry (CPU, memory, disk, processes, network, displays)
//! as MCP tools for LLM assistant clients. Every call recomputes its data
//! fresh; there is no history, caching, or persistence.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use telemetry_mcp::TelemetryMcpServer;
//!
//! let server = TelemetryMcpServer::new();
//! // Serve via stdio or drive the tool methods directly
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `telemetry-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "telemetry": { "command": "./telemetry-mcp" } } }
//! ```

pub mod display;
pub mod exec;
pub mod format;
pub mod info;
pub mod result;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::TelemetryMcpServer;

// Re-export parameter types for direct API usage
pub use server::ProcessParams;
