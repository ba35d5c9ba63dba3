//! Interpolation algorithms for tabular data.
//!
//! This module provides the interpolation strategies used to estimate
//! replacement values for missing cells in a table.

pub mod common;
pub mod neighbor_mean;

use crate::error::Result;
use crate::table::Table;

/// Trait for interpolation methods
pub trait Interpolator {
    /// Fill every missing cell in the held table, in place.
    ///
    /// Single-shot: the set of missing cells is captured when the
    /// interpolator is constructed, so a second invocation operates on a
    /// stale snapshot and is unsupported.
    fn interpolate(&mut self, use_diagonals: bool) -> Result<()>;

    /// Borrow the (possibly partially filled) table
    fn table(&self) -> &Table;

    /// Consume the interpolator and hand the table to the next stage
    fn into_table(self: Box<Self>) -> Table;

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Get an interpolator by name, giving it ownership of the table
pub fn get_interpolator(name: &str, table: Table) -> Result<Box<dyn Interpolator>> {
    match name.to_lowercase().as_str() {
        "neighbor-mean" => Ok(Box::new(neighbor_mean::NeighborMeanInterpolator::new(
            table,
        ))),
        _ => Err(crate::error::GridfillError::InvalidParameter {
            param: "method".to_string(),
            message: format!("Unknown interpolation method: {}", name),
        }),
    }
}
