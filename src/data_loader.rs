//! CSV data loading functionality.
//!
//! This module handles reading delimited text files into the in-memory
//! [`Table`]. Input is comma-separated with no header row; the
//! case-insensitive literal `nan` marks a missing entry.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{GridfillError, Result};
use crate::table::Table;

/// Capability interface for data ingestors.
///
/// An ingestor parses its source eagerly at construction and tracks a
/// `validated` flag, false until an explicit validation pass succeeds.
pub trait DataIngestor {
    /// Check that the loaded data conforms to expectations.
    fn validate(&mut self) -> Result<()>;

    /// Whether a validation pass has succeeded.
    fn is_validated(&self) -> bool;

    /// Borrow the loaded table.
    fn table(&self) -> &Table;

    /// Consume the ingestor and hand the table to the next stage.
    ///
    /// Reading unvalidated data is allowed but warns.
    fn into_table(self) -> Table;
}

/// Data ingestor for tabular data in a CSV file.
pub struct CsvIngestor {
    path: PathBuf,
    table: Table,
    validated: bool,
}

impl CsvIngestor {
    /// Open and parse a CSV file.
    ///
    /// Fails with [`GridfillError::NotFound`] if the path does not exist
    /// (checked before any read), [`GridfillError::NonNumeric`] if a field is
    /// neither a float nor `nan`, and [`GridfillError::EmptyData`] if the
    /// file holds no rows at all. Ragged rows surface as a CSV error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GridfillError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let table = load_csv(path)?;
        info!(
            path = %path.display(),
            rows = table.nrows(),
            cols = table.ncols(),
            missing = table.missing_count(),
            "Loaded CSV file"
        );

        Ok(Self {
            path: path.to_path_buf(),
            table,
            validated: false,
        })
    }
}

impl DataIngestor for CsvIngestor {
    fn validate(&mut self) -> Result<()> {
        if self.table.is_empty() {
            return Err(GridfillError::EmptyData);
        }
        if self.table.nrows() == 1 {
            warn!(
                path = %self.path.display(),
                "Ingestion produced a single row. Verify this is expected and that your newline characters are correct"
            );
        }
        if self.table.ncols() == 1 {
            warn!(
                path = %self.path.display(),
                "Ingestion produced a single column. Verify this is expected and that the file uses a comma delimiter"
            );
        }
        self.validated = true;
        debug!(path = %self.path.display(), "Validated ingested data");
        Ok(())
    }

    fn is_validated(&self) -> bool {
        self.validated
    }

    fn table(&self) -> &Table {
        &self.table
    }

    fn into_table(self) -> Table {
        if !self.validated {
            warn!(path = %self.path.display(), "Data has not been validated");
        }
        self.table
    }
}

/// Read a headerless CSV file into a table.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(record.len());
        for (col_idx, field) in record.iter().enumerate() {
            row.push(parse_field(field, row_idx, col_idx)?);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(GridfillError::EmptyData);
    }

    Table::from_rows(rows)
}

/// Parse one CSV field as a float, mapping `nan` to the missing sentinel.
fn parse_field(field: &str, row: usize, col: usize) -> Result<f64> {
    let trimmed = field.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| GridfillError::NonNumeric {
            row,
            col,
            value: field.to_string(),
        })
}
