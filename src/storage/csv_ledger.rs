//! CSV ledger backend
//!
//! One header row (`fecha,categoria,cantidad,metodo_pago`) followed by one
//! row per expense. The file is opened and closed inside every call.

use crate::config::GastosConfig;
use crate::error::Result;
use crate::storage::LedgerBackend;
use crate::types::{ExpenseRecord, NewExpense, HEADER};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ledger stored as a comma-delimited UTF-8 file
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Create a ledger backed by the given file (not touched until used)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a ledger from the resolved configuration
    pub fn from_config(config: &GastosConfig) -> Self {
        Self::new(config.data_path())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file is absent or has no bytes yet, so it needs a header
    fn needs_header(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

/// Last byte of a non-empty file is a line terminator
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl LedgerBackend for CsvLedger {
    fn append(&self, expense: &NewExpense) -> Result<ExpenseRecord> {
        let record = expense.to_record();
        let write_header = self.needs_header()?;

        if write_header {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            info!("Creating ledger file {}", self.path.display());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // A hand-edited ledger may lack the final newline; never glue rows together
        if !write_header && !ends_with_newline(&mut file)? {
            debug!("Ledger {} missing trailing newline", self.path.display());
            file.write_all(b"\n")?;
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            writer.write_record(HEADER)?;
        }
        writer.serialize(&record)?;
        writer.flush()?;

        debug!("Appended expense: {}", record);
        Ok(record)
    }

    fn read_all(&self) -> Result<Vec<ExpenseRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Ledger {} not found, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(file);

        let records = reader
            .deserialize::<ExpenseRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            "Read {} expenses from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GastosError;
    use tempfile::TempDir;

    fn ledger_in(dir: &TempDir) -> CsvLedger {
        CsvLedger::new(dir.path().join("data").join("gastos.csv"))
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        assert!(ledger.read_all().unwrap().is_empty());
        assert!(!ledger.path().exists());
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        let expense = NewExpense::parse("2024-01-01", "food", 10.5, "cash").unwrap();
        ledger.append(&expense).unwrap();

        let contents = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(
            contents,
            "fecha,categoria,cantidad,metodo_pago\n2024-01-01,food,10.5,cash\n"
        );
    }

    #[test]
    fn test_second_append_does_not_repeat_header() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        ledger
            .append(&NewExpense::parse("2024-01-01", "food", 10.5, "cash").unwrap())
            .unwrap();
        ledger
            .append(&NewExpense::parse("2024-01-10", "transport", 3.0, "card").unwrap())
            .unwrap();

        let contents = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(contents.matches("fecha").count(), 1);
        assert!(contents.ends_with("2024-01-10,transport,3.0,card\n"));
    }

    #[test]
    fn test_append_after_missing_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gastos.csv");
        fs::write(
            &path,
            "fecha,categoria,cantidad,metodo_pago\n2024-01-01,food,10.5,cash",
        )
        .unwrap();

        let ledger = CsvLedger::new(&path);
        ledger
            .append(&NewExpense::parse("2024-01-02", "coffee", 1.0, "card").unwrap())
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "fecha,categoria,cantidad,metodo_pago\n2024-01-01,food,10.5,cash\n2024-01-02,coffee,1.0,card\n"
        );

        let records = ledger.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, "coffee");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        let expense = NewExpense::parse("2024-02-03", "food, drinks", 7.25, "cash").unwrap();
        ledger.append(&expense).unwrap();

        let records = ledger.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "food, drinks");
    }

    #[test]
    fn test_legacy_header_is_normalized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gastos.csv");
        fs::write(
            &path,
            "fecha,categoria,cantidad,metodo de pago\n2024-01-01,food,10.5,cash\n",
        )
        .unwrap();

        let records = CsvLedger::new(&path).read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payment_method, "cash");
    }

    #[test]
    fn test_non_numeric_amount_fails_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gastos.csv");
        fs::write(
            &path,
            "fecha,categoria,cantidad,metodo_pago\n2024-01-01,food,10.5,cash\n2024-01-02,food,diez,cash\n",
        )
        .unwrap();

        let result = CsvLedger::new(&path).read_all();
        assert!(matches!(result, Err(GastosError::Csv(_))));
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gastos.csv");
        fs::write(&path, "").unwrap();

        let ledger = CsvLedger::new(&path);
        ledger
            .append(&NewExpense::parse("2024-03-01", "rent", 500.0, "transfer").unwrap())
            .unwrap();

        let records = ledger.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 500.0);
    }
}
