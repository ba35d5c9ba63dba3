//! Error types for the gridfill application.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the pipeline. Every failure is fatal and propagates
//! to the caller immediately; there is no retry or local recovery anywhere.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gridfill operations.
#[derive(Error, Debug)]
pub enum GridfillError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing/writing errors (ragged rows, writer failures)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Input path does not exist
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// A cell could not be interpreted as a floating-point value
    #[error("Non-numeric value {value:?} at row {row}, column {col}")]
    NonNumeric {
        row: usize,
        col: usize,
        value: String,
    },

    /// Ingestion produced a table with no rows and no columns
    #[error("Ingested table is empty. Is the input file empty?")]
    EmptyData,

    /// A missing cell has no usable neighbor to average over
    #[error("Value could not be interpolated for cell ({row}, {col}): all neighbors are missing")]
    UnresolvableCell { row: usize, col: usize },

    /// Output path already exists and overwrite was not requested
    #[error("Output file already exists: {path} (pass --overwrite to replace it)")]
    FileExists { path: PathBuf },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with GridfillError
pub type Result<T> = std::result::Result<T, GridfillError>;
