//! MCP prompts
//!
//! One prompt: an analytical summary of the last five days of expenses.

use crate::error::{GastosError, Result};
use crate::recency::{self, DEFAULT_DAYS};
use crate::storage::LedgerBackend;
use crate::summary::build_summary_prompt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const SUMMARY_PROMPT: &str = "Resumen de Gastos Recientes";

const SUMMARY_DESCRIPTION: &str =
    "Genera un resumen analítico de los gastos de los últimos 5 días usando IA.";

/// Prompt descriptor returned by `prompts/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub name: String,
    pub description: String,
    pub arguments: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Serves prompt templates
pub struct PromptHandler {
    ledger: Arc<dyn LedgerBackend>,
}

impl PromptHandler {
    pub fn new(ledger: Arc<dyn LedgerBackend>) -> Self {
        Self { ledger }
    }

    pub fn list_prompts(&self) -> Vec<Prompt> {
        vec![Prompt {
            name: SUMMARY_PROMPT.to_string(),
            description: SUMMARY_DESCRIPTION.to_string(),
            arguments: Vec::new(),
            tags: ["finanzas", "gastos", "resumen", "analisis"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            meta: Some(serde_json::json!({
                "version": "1.0",
                "author": "Jiliar Silgado"
            })),
        }]
    }

    /// Render a prompt by name
    pub fn get(&self, name: &str) -> Result<Value> {
        debug!("Rendering prompt: {}", name);

        if name != SUMMARY_PROMPT {
            return Err(GastosError::UnknownPrompt(name.to_string()));
        }

        let text = self.summary_text();
        Ok(serde_json::json!({
            "description": SUMMARY_DESCRIPTION,
            "messages": [
                {
                    "role": "user",
                    "content": {
                        "type": "text",
                        "text": text
                    }
                }
            ]
        }))
    }

    /// Prompt text for the default window
    pub fn summary_text(&self) -> String {
        let recent = recency::recent_expenses(self.ledger.as_ref(), DEFAULT_DAYS);
        build_summary_prompt(&recent)
    }
}
