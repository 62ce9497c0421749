//! MCP server startup command

use gastos_core::{error::Result, CsvLedger, GastosConfig, McpServer};
use std::sync::Arc;
use tracing::debug;

/// Handle MCP server startup command
pub async fn handle(config: &GastosConfig) -> Result<()> {
    debug!("Starting MCP server...");
    debug!("Using ledger: {}", config.data_path().display());

    let ledger = Arc::new(CsvLedger::from_config(config));
    let server = McpServer::with_ledger(ledger);

    server.run().await
}
