//! Core data types for the Gastos ledger
//!
//! An [`ExpenseRecord`] is one row of the ledger file. Field names on the wire
//! (CSV header and JSON) are the Spanish column names; the legacy spelling
//! `metodo de pago` is accepted when reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical on-disk date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names, in file order
pub const HEADER: [&str; 4] = ["fecha", "categoria", "cantidad", "metodo_pago"];

/// One expense entry
///
/// The date is kept as the text found in the file. It is interpreted only
/// where a calendar date is needed, so a single odd row does not make the
/// whole ledger unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date of the expense, `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    pub date: String,

    /// Free-text category
    #[serde(rename = "categoria")]
    pub category: String,

    /// Amount spent
    #[serde(rename = "cantidad")]
    pub amount: f64,

    /// Free-text payment method
    #[serde(rename = "metodo_pago", alias = "metodo de pago")]
    pub payment_method: String,
}

impl ExpenseRecord {
    /// Parse the stored date
    pub fn parsed_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {:?}, {}",
            self.date, self.category, self.amount, self.payment_method
        )
    }
}

/// An expense about to be appended, with its date already validated
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub payment_method: String,
}

impl NewExpense {
    /// Validate the raw date and build an expense ready for storage
    pub fn parse(
        date: &str,
        category: impl Into<String>,
        amount: f64,
        payment_method: impl Into<String>,
    ) -> crate::error::Result<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|source| {
            crate::error::GastosError::InvalidDate {
                value: date.to_string(),
                source,
            }
        })?;

        Ok(Self {
            date,
            category: category.into(),
            amount,
            payment_method: payment_method.into(),
        })
    }

    /// Row as it will be written, with the date in canonical form
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            date: self.date.format(DATE_FORMAT).to_string(),
            category: self.category.clone(),
            amount: self.amount,
            payment_method: self.payment_method.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_uses_column_names() {
        let record = ExpenseRecord {
            date: "2024-01-10".to_string(),
            category: "transport".to_string(),
            amount: 3.0,
            payment_method: "card".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fecha"], "2024-01-10");
        assert_eq!(json["categoria"], "transport");
        assert_eq!(json["cantidad"], 3.0);
        assert_eq!(json["metodo_pago"], "card");
    }

    #[test]
    fn test_legacy_payment_method_alias() {
        let json = serde_json::json!({
            "fecha": "2024-01-01",
            "categoria": "food",
            "cantidad": 10.5,
            "metodo de pago": "cash"
        });

        let record: ExpenseRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.payment_method, "cash");
    }

    #[test]
    fn test_new_expense_normalizes_date() {
        let expense = NewExpense::parse("2024-1-5", "food", 12.0, "cash").unwrap();
        assert_eq!(expense.to_record().date, "2024-01-05");
    }

    #[test]
    fn test_new_expense_rejects_bad_date() {
        let result = NewExpense::parse("2024/13/40", "food", 12.0, "cash");
        assert!(matches!(
            result,
            Err(crate::error::GastosError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_display_keeps_decimal_point() {
        let record = NewExpense::parse("2024-01-10", "transport", 3.0, "card")
            .unwrap()
            .to_record();
        assert_eq!(record.to_string(), "2024-01-10, transport, 3.0, card");
    }
}
