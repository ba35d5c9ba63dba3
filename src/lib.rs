//! # gridfill
//!
//! Fill missing values in CSV tables by averaging neighboring cells.
//!
//! This library provides the core functionality for loading a rectangular
//! numeric table from a CSV file, replacing each missing entry (`nan`) with
//! the mean of its spatial neighbors, and writing the filled table back out.
//!
//! ## Architecture
//!
//! - **Data Layer**: Loads CSV files into an in-memory ndarray-backed table
//! - **Interpolation**: Replaces missing cells in a single in-place pass,
//!   optionally including diagonal neighbors
//! - **Export**: Rounds values to a configured precision and writes
//!   headerless CSV
//!
//! The pipeline is strictly sequential (load → interpolate → export) with a
//! single owner of the table at each stage, and every failure is fatal.

pub mod config;
pub mod data_exporter;
pub mod data_loader;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod pipeline;
pub mod table;

pub use config::Config;
pub use error::{GridfillError, Result};
pub use logging::{init_tracing, log_error, log_table_stats, log_timed_operation};
pub use table::Table;
