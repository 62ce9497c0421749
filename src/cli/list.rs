//! Full ledger listing command

use gastos_core::{error::Result, CsvLedger, GastosConfig, LedgerBackend};

use super::helpers::{print_records, OutputFormat};

/// Handle ledger listing command
pub async fn handle(config: &GastosConfig, format: OutputFormat) -> Result<()> {
    let ledger = CsvLedger::from_config(config);
    let records = ledger.read_all()?;
    print_records(&records, format)
}
