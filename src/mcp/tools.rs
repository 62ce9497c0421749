//! MCP tool implementations
//!
//! Provides the two ledger tools:
//! - agregar_gasto: append one expense
//! - obtener_gastos_recientes: expenses from the last N days

use crate::error::{GastosError, Result};
use crate::recency::{self, DEFAULT_DAYS};
use crate::storage::LedgerBackend;
use crate::types::NewExpense;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

pub const ADD_EXPENSE: &str = "agregar_gasto";
pub const RECENT_EXPENSES: &str = "obtener_gastos_recientes";

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (e.g., "agregar_gasto")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tool handler that dispatches to appropriate implementation
pub struct ToolHandler {
    ledger: Arc<dyn LedgerBackend>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(ledger: Arc<dyn LedgerBackend>) -> Self {
        Self { ledger }
    }

    /// Get list of all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: ADD_EXPENSE.to_string(),
                description: "Agrega un nuevo gasto al archivo de gastos. Devuelve un mensaje de confirmación o de error.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "fecha": {
                            "type": "string",
                            "description": "Fecha del gasto en formato YYYY-MM-DD"
                        },
                        "categoria": {
                            "type": "string",
                            "description": "Categoría del gasto"
                        },
                        "cantidad": {
                            "type": "number",
                            "description": "Monto del gasto"
                        },
                        "metodo_pago": {
                            "type": "string",
                            "description": "Método de pago utilizado"
                        }
                    },
                    "required": ["fecha", "categoria", "cantidad", "metodo_pago"]
                }),
            },
            Tool {
                name: RECENT_EXPENSES.to_string(),
                description: "Obtiene los gastos de los últimos N días para que la IA pueda generar un resumen.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "dias": {
                            "type": "integer",
                            "description": "Número de días a consultar",
                            "default": DEFAULT_DAYS
                        }
                    }
                }),
            },
        ]
    }

    /// Execute a tool call
    pub async fn execute(&self, tool_name: &str, params: Value) -> Result<Value> {
        debug!("Executing tool: {}", tool_name);

        match tool_name {
            ADD_EXPENSE => self.add_expense(params),
            RECENT_EXPENSES => self.recent_expenses(params),
            _ => {
                warn!("Unknown tool: {}", tool_name);
                Err(GastosError::UnknownTool(tool_name.to_string()))
            }
        }
    }

    fn add_expense(&self, params: Value) -> Result<Value> {
        #[derive(Deserialize)]
        struct AddExpenseParams {
            fecha: String,
            categoria: String,
            cantidad: f64,
            metodo_pago: String,
        }

        let params: AddExpenseParams = parse_params(params)?;

        // Storage failures are reported to the model as text, not as a protocol error
        let message = match append_expense(
            self.ledger.as_ref(),
            &params.fecha,
            &params.categoria,
            params.cantidad,
            &params.metodo_pago,
        ) {
            Ok(confirmation) => confirmation,
            Err(e) => {
                warn!("Failed to add expense: {}", e);
                render_append_error(&e)
            }
        };

        Ok(Value::String(message))
    }

    fn recent_expenses(&self, params: Value) -> Result<Value> {
        #[derive(Deserialize, Default)]
        struct RecentParams {
            dias: Option<i64>,
        }

        let params: RecentParams = if params.is_null() {
            RecentParams::default()
        } else {
            parse_params(params)?
        };
        let days = params.dias.unwrap_or(DEFAULT_DAYS);

        let recent = recency::recent_expenses(self.ledger.as_ref(), days);
        Ok(serde_json::to_value(recent)?)
    }
}

/// Validate and append one expense, returning the confirmation message
pub fn append_expense(
    ledger: &dyn LedgerBackend,
    fecha: &str,
    categoria: &str,
    cantidad: f64,
    metodo_pago: &str,
) -> Result<String> {
    let expense = NewExpense::parse(fecha, categoria, cantidad, metodo_pago)?;
    let stored = ledger.append(&expense)?;
    Ok(format!("Gasto agregado: {}", stored))
}

/// Text shown to the caller when an append fails
pub fn render_append_error(err: &GastosError) -> String {
    format!("Error al agregar gasto: {}", err)
}

fn parse_params<T: serde::de::DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| GastosError::InvalidParams(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CsvLedger;
    use tempfile::TempDir;

    #[test]
    fn test_tool_schemas() {
        let dir = TempDir::new().unwrap();
        let handler = ToolHandler::new(Arc::new(CsvLedger::new(dir.path().join("g.csv"))));

        let tools = handler.list_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![ADD_EXPENSE, RECENT_EXPENSES]);

        let json = serde_json::to_value(&tools[0]).unwrap();
        assert_eq!(json["inputSchema"]["required"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_append_expense_confirmation() {
        let dir = TempDir::new().unwrap();
        let ledger = CsvLedger::new(dir.path().join("g.csv"));

        let message = append_expense(&ledger, "2024-01-10", "transport", 3.0, "card").unwrap();
        assert_eq!(message, "Gasto agregado: 2024-01-10, transport, 3.0, card");
    }

    #[test]
    fn test_render_append_error() {
        let dir = TempDir::new().unwrap();
        let ledger = CsvLedger::new(dir.path().join("g.csv"));

        let err = append_expense(&ledger, "2024/13/40", "food", 1.0, "cash").unwrap_err();
        let text = render_append_error(&err);
        assert!(text.starts_with("Error al agregar gasto: "));
        assert!(text.contains("2024/13/40"));
    }
}
