//! Shared helper functions for CLI commands

use clap::ValueEnum;
use gastos_core::{error::Result, ExpenseRecord};

/// Output format for record listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with a total
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Print records in the requested format
pub fn print_records(records: &[ExpenseRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No expenses found");
                return Ok(());
            }

            println!("{:<10}  {:<20}  {:>10}  {}", "fecha", "categoria", "cantidad", "metodo_pago");
            for record in records {
                println!(
                    "{:<10}  {:<20}  {:>10.2}  {}",
                    record.date, record.category, record.amount, record.payment_method
                );
            }

            let total: f64 = records.iter().map(|r| r.amount).sum();
            println!();
            println!("{} expense(s), total {:.2}", records.len(), total);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(OutputFormat::from_str("text", false).unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON", true).unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml", false).is_err());
    }

    #[test]
    fn test_possible_values_listed() {
        let names: Vec<_> = OutputFormat::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["text", "json"]);
    }
}
