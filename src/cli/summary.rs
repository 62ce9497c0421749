//! Summary prompt command

use gastos_core::{error::Result, CsvLedger, GastosConfig, PromptHandler};
use std::sync::Arc;

/// Print the summary prompt the MCP prompt endpoint would return
pub async fn handle(config: &GastosConfig) -> Result<()> {
    let handler = PromptHandler::new(Arc::new(CsvLedger::from_config(config)));
    println!("{}", handler.summary_text());
    Ok(())
}
