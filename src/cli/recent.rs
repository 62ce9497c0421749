//! Recent expenses command

use gastos_core::{error::Result, recency, CsvLedger, GastosConfig};
use tracing::debug;

use super::helpers::{print_records, OutputFormat};

/// Handle recent expenses command
pub async fn handle(config: &GastosConfig, days: i64, format: OutputFormat) -> Result<()> {
    debug!("Listing expenses from the last {} days", days);

    let ledger = CsvLedger::from_config(config);
    let recent = recency::recent_expenses(&ledger, days);
    print_records(&recent, format)
}
