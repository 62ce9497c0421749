//! Storage layer for the Gastos ledger
//!
//! Provides the backend abstraction for durable, append-only storage of
//! expense records and the CSV file implementation.

pub mod csv_ledger;

use crate::error::Result;
use crate::types::{ExpenseRecord, NewExpense};

pub use csv_ledger::CsvLedger;

/// Ledger backend trait defining all required operations
///
/// Records are immutable once written: there is no update or delete.
pub trait LedgerBackend: Send + Sync {
    /// Append one expense, returning the row exactly as stored
    fn append(&self, expense: &NewExpense) -> Result<ExpenseRecord>;

    /// Read every record in file order (oldest append first)
    ///
    /// A missing ledger is an empty ledger, not an error.
    fn read_all(&self) -> Result<Vec<ExpenseRecord>>;
}
