//! MCP resources
//!
//! Exposes the full ledger read-only as `resource://gastos`.

use crate::error::{GastosError, Result};
use crate::storage::LedgerBackend;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const LEDGER_URI: &str = "resource://gastos";

/// Resource descriptor returned by `resources/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Serves ledger resources
pub struct ResourceHandler {
    ledger: Arc<dyn LedgerBackend>,
}

impl ResourceHandler {
    pub fn new(ledger: Arc<dyn LedgerBackend>) -> Self {
        Self { ledger }
    }

    pub fn list_resources(&self) -> Vec<Resource> {
        vec![Resource {
            uri: LEDGER_URI.to_string(),
            name: "gastos".to_string(),
            description: "Todos los gastos almacenados, con los campos fecha, categoria, cantidad y metodo_pago.".to_string(),
            mime_type: "application/json".to_string(),
        }]
    }

    /// Read a resource by URI
    ///
    /// Unlike the recent-expenses tool, a ledger that fails to parse is an
    /// error here.
    pub fn read(&self, uri: &str) -> Result<Value> {
        debug!("Reading resource: {}", uri);

        if uri != LEDGER_URI {
            return Err(GastosError::UnknownResource(uri.to_string()));
        }

        let records = self.ledger.read_all()?;
        let text = serde_json::to_string_pretty(&records)?;

        Ok(serde_json::json!({
            "contents": [
                {
                    "uri": LEDGER_URI,
                    "mimeType": "application/json",
                    "text": text
                }
            ]
        }))
    }
}
