//! Trailing-window filter over ledger records
//!
//! A record is recent when its date, taken at midnight, is not earlier than
//! `now - days`. Failures never reach the caller: they are logged and an
//! empty selection is returned.

use crate::error::{GastosError, Result};
use crate::storage::LedgerBackend;
use crate::types::ExpenseRecord;
use chrono::{Duration, Local, NaiveDateTime};
use tracing::{debug, warn};

/// Window used by the tool and prompt when no day count is given
pub const DEFAULT_DAYS: i64 = 5;

/// Records within the last `days` days of the local clock
pub fn recent_within_days(records: &[ExpenseRecord], days: i64) -> Vec<ExpenseRecord> {
    recent_within_days_at(records, days, Local::now().naive_local())
}

/// Records within `days` days before `now`
pub fn recent_within_days_at(
    records: &[ExpenseRecord],
    days: i64,
    now: NaiveDateTime,
) -> Vec<ExpenseRecord> {
    match try_filter(records, days, now) {
        Ok(recent) => recent,
        Err(e) => {
            warn!("Failed to select recent expenses: {}", e);
            Vec::new()
        }
    }
}

/// Read the whole ledger and keep the last `days` days
///
/// A ledger that cannot be read degrades the same way as a bad date.
pub fn recent_expenses(ledger: &dyn LedgerBackend, days: i64) -> Vec<ExpenseRecord> {
    recent_expenses_at(ledger, days, Local::now().naive_local())
}

/// Same as [`recent_expenses`] with an explicit clock
pub fn recent_expenses_at(
    ledger: &dyn LedgerBackend,
    days: i64,
    now: NaiveDateTime,
) -> Vec<ExpenseRecord> {
    match ledger.read_all() {
        Ok(records) => recent_within_days_at(&records, days, now),
        Err(e) => {
            warn!("Failed to select recent expenses: {}", e);
            Vec::new()
        }
    }
}

fn try_filter(
    records: &[ExpenseRecord],
    days: i64,
    now: NaiveDateTime,
) -> Result<Vec<ExpenseRecord>> {
    let window = Duration::try_days(days)
        .ok_or_else(|| GastosError::InvalidParams(format!("day window out of range: {}", days)))?;
    let cutoff = now
        .checked_sub_signed(window)
        .ok_or_else(|| GastosError::InvalidParams(format!("day window out of range: {}", days)))?;

    let mut recent = Vec::new();
    for record in records {
        let date = record
            .parsed_date()
            .map_err(|source| GastosError::InvalidDate {
                value: record.date.clone(),
                source,
            })?;

        if date.and_time(chrono::NaiveTime::MIN) >= cutoff {
            recent.push(record.clone());
        }
    }

    debug!(
        "{} of {} expenses fall within {} days of {}",
        recent.len(),
        records.len(),
        days,
        now
    );
    Ok(recent)
}
