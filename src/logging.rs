//! Logging utilities for gridfill.
//!
//! This module provides structured logging functionality so pipeline runs
//! are searchable and diagnosable from their output alone.

use std::time::Instant;
use tracing::{debug, error, info};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    let duration = start.elapsed();

    info!(
        operation = operation,
        duration_ms = duration.as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log detailed information about a loaded table
pub fn log_table_stats(file_path: &str, rows: usize, cols: usize, missing: usize) {
    info!(
        operation = "data_load",
        file_path = file_path,
        rows = rows,
        cols = cols,
        missing = missing,
        "Data loaded successfully"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::GridfillError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}
