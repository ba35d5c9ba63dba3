//! CSV data export functionality.
//!
//! This module writes a [`Table`] back out as comma-separated text with no
//! header and no index column, rounding every value to a configured number
//! of decimal places first.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{GridfillError, Result};
use crate::table::Table;

/// Capability interface for data exporters.
pub trait DataExporter {
    /// Write the held table to the destination.
    fn export(&self, decimals: u32, overwrite: bool) -> Result<()>;
}

/// Export a table to a CSV file.
pub struct CsvExporter {
    table: Table,
    path: PathBuf,
}

impl CsvExporter {
    /// Take ownership of the final table and remember the target path.
    pub fn new(table: Table, path: impl AsRef<Path>) -> Self {
        Self {
            table,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataExporter for CsvExporter {
    /// Write the table to the target path.
    ///
    /// Fails with [`GridfillError::FileExists`] if the path exists and
    /// `overwrite` is false; replaces the file when `overwrite` is true.
    fn export(&self, decimals: u32, overwrite: bool) -> Result<()> {
        if !overwrite && self.path.exists() {
            return Err(GridfillError::FileExists {
                path: self.path.clone(),
            });
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in self.table.rows() {
            let record: Vec<String> = row.iter().map(|&v| format_value(v, decimals)).collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;

        info!(
            path = %self.path.display(),
            rows = self.table.nrows(),
            cols = self.table.ncols(),
            decimals = decimals,
            "Exported CSV file"
        );
        Ok(())
    }
}

/// Round a value to `decimals` places (rounding, not truncation).
fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Serialize one cell value.
///
/// Whole numbers keep a single decimal digit (`5` writes as `5.0`) so the
/// output stays unambiguously floating-point.
fn format_value(value: f64, decimals: u32) -> String {
    let rounded = round_to_decimals(value, decimals);
    if rounded.is_finite() && rounded == rounded.trunc() {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}
