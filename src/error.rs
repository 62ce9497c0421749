//! Error types for the Gastos ledger
//!
//! Structured error definitions use thiserror. The binary wraps these with
//! anyhow context at its edge.

use thiserror::Error;

/// Main error type for Gastos operations
#[derive(Error, Debug)]
pub enum GastosError {
    /// I/O error (opening, creating or writing the ledger file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error, including non-numeric amounts
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Date not in YYYY-MM-DD form
    #[error("Invalid date '{value}': expected format YYYY-MM-DD ({source})")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Tool, resource or prompt arguments did not match the schema
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Unknown tool name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Unknown resource URI
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Unknown prompt name
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Gastos operations
pub type Result<T> = std::result::Result<T, GastosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GastosError::UnknownTool("borrar_gasto".to_string());
        assert_eq!(err.to_string(), "Unknown tool: borrar_gasto");
    }

    #[test]
    fn test_invalid_date_mentions_value_and_format() {
        let source = chrono::NaiveDate::parse_from_str("2024/13/40", "%Y-%m-%d").unwrap_err();
        let err = GastosError::InvalidDate {
            value: "2024/13/40".to_string(),
            source,
        };

        let msg = err.to_string();
        assert!(msg.contains("2024/13/40"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GastosError = io_err.into();
        assert!(matches!(err, GastosError::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GastosError = json_err.into();
        assert!(matches!(err, GastosError::Serialization(_)));
    }
}
