//! Expense recording command

use gastos_core::{
    error::Result,
    mcp::tools::{append_expense, render_append_error},
    CsvLedger, GastosConfig, GastosError,
};
use tracing::debug;

/// Handle expense recording command
pub async fn handle(
    config: &GastosConfig,
    fecha: String,
    categoria: String,
    cantidad: f64,
    metodo_pago: String,
) -> Result<()> {
    let ledger = CsvLedger::from_config(config);
    debug!("Recording expense in {}", ledger.path().display());

    match append_expense(&ledger, &fecha, &categoria, cantidad, &metodo_pago) {
        Ok(confirmation) => {
            println!("{}", confirmation);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", render_append_error(&e));
            Err(GastosError::Other(format!("expense not recorded: {}", e)))
        }
    }
}
