//! Pipeline orchestration: load → interpolate → export.
//!
//! Stages run strictly in sequence and hand the table off by move; any error
//! aborts the whole run.

use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::data_exporter::{CsvExporter, DataExporter};
use crate::data_loader::{CsvIngestor, DataIngestor};
use crate::error::{GridfillError, Result};
use crate::interpolation::get_interpolator;
use crate::logging::{log_table_stats, log_timed_operation};

/// Fail-fast file and directory checks, run before any processing.
pub fn preflight(input_file: &Path, output_file: &Path, overwrite: bool) -> Result<()> {
    if !input_file.exists() {
        return Err(GridfillError::NotFound {
            path: input_file.to_path_buf(),
        });
    }

    // An empty parent means the output goes in the current directory
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(GridfillError::Config {
                message: format!("{} is not an existing directory", parent.display()),
            });
        }
    }

    if !overwrite && output_file.exists() {
        return Err(GridfillError::FileExists {
            path: output_file.to_path_buf(),
        });
    }

    Ok(())
}

/// Run the full pipeline with the given configuration.
pub fn run(config: &Config, input_file: &Path, output_file: &Path) -> Result<()> {
    preflight(input_file, output_file, config.output.overwrite)?;

    // Ingest
    let mut ingestor = CsvIngestor::open(input_file)?;
    ingestor.validate()?;
    let table = ingestor.into_table();
    log_table_stats(
        &input_file.display().to_string(),
        table.nrows(),
        table.ncols(),
        table.missing_count(),
    );

    // Interpolate
    let mut interpolator = get_interpolator(&config.interpolation.method, table)?;
    info!(
        method = interpolator.name(),
        use_diagonals = config.interpolation.use_diagonals,
        "Interpolating missing cells"
    );
    log_timed_operation("interpolate", || {
        interpolator.interpolate(config.interpolation.use_diagonals)
    })?;
    let table = interpolator.into_table();

    // Export
    let exporter = CsvExporter::new(table, output_file);
    exporter.export(config.output.decimals, config.output.overwrite)?;

    Ok(())
}
