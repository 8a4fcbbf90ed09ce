// MCP (Model Context Protocol) server for chess statistics and time tracking
// tools. Transport is line-delimited JSON-RPC 2.0 over stdio.

pub mod envelope;
pub mod protocol;
pub mod server;
pub mod tools;

pub use envelope::ToolResult;
pub use server::McpServer;
