//! Gastos - personal expense ledger over MCP
//!
//! Records expenses in an append-only CSV file and exposes them to an AI
//! client through the Model Context Protocol:
//! - `agregar_gasto` tool to record an expense
//! - `obtener_gastos_recientes` tool to list the last N days
//! - `resource://gastos` with the whole ledger
//! - a prompt asking for an analytical summary of the last five days
//!
//! # Example
//!
//! ```ignore
//! use gastos_core::{CsvLedger, GastosConfig, LedgerBackend, NewExpense};
//!
//! let config = GastosConfig::resolve(None)?;
//! let ledger = CsvLedger::from_config(&config);
//! ledger.append(&NewExpense::parse("2024-01-10", "transport", 3.0, "card")?)?;
//! let recent = gastos_core::recency::recent_within_days(&ledger.read_all()?, 5);
//! ```

pub mod config;
pub mod error;
pub mod mcp;
pub mod recency;
pub mod storage;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use config::GastosConfig;
pub use error::{GastosError, Result};
pub use mcp::{McpServer, PromptHandler, ResourceHandler, ToolHandler};
pub use storage::{CsvLedger, LedgerBackend};
pub use types::{ExpenseRecord, NewExpense};
