//! Configuration for the Gastos ledger
//!
//! The only setting is where the ledger file lives. It is resolved once at
//! startup and handed to the store explicitly.

use crate::error::{GastosError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the ledger path
pub const DATA_PATH_ENV: &str = "GASTOS_DATA_PATH";

/// Ledger path used when nothing else is configured
pub const DEFAULT_DATA_PATH: &str = "data/gastos.csv";

/// Runtime configuration shared by the server and CLI commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GastosConfig {
    /// Location of the CSV ledger
    pub data_path: PathBuf,
}

impl GastosConfig {
    /// Build a configuration pointing at an explicit ledger file
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Resolve the ledger path from CLI arg, env var, or default
    pub fn resolve(cli_path: Option<String>) -> Result<Self> {
        let path = cli_path
            .or_else(|| env::var(DATA_PATH_ENV).ok().filter(|p| !p.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        if path.trim().is_empty() {
            return Err(GastosError::Config(
                "ledger path cannot be empty".to_string(),
            ));
        }

        debug!("Using ledger file: {}", path);
        Ok(Self::new(path))
    }

    /// Ledger file path
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl Default for GastosConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}
