//! Model Context Protocol (MCP) server implementation
//!
//! Provides a JSON-RPC 2.0 server over stdio exposing the expense ledger as
//! two tools, one resource and one prompt.

pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use prompts::PromptHandler;
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use resources::ResourceHandler;
pub use server::McpServer;
pub use tools::ToolHandler;
