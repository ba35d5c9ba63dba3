//! Neighbor-mean interpolation.
//!
//! This method replaces each missing cell with the arithmetic mean of its
//! immediate neighbors, optionally including the diagonals. Neighbors that
//! are themselves missing are excluded from the mean; if every neighbor of a
//! cell is missing, the whole operation fails.
//!
//! The set of missing cells is captured once, at construction, in row-major
//! scan order, and the table is mutated in place while that list is walked.
//! A cell filled early in the pass is therefore visible as a concrete value
//! to cells resolved later in the same pass. This in-place propagation is
//! part of the contract, not an accident: results can differ from a
//! snapshot-consistent interpolation and must stay that way.

use tracing::debug;

use super::Interpolator;
use crate::error::{GridfillError, Result};
use crate::interpolation::common;
use crate::table::Table;

/// Neighbor-mean interpolator
pub struct NeighborMeanInterpolator {
    table: Table,
    /// Row-major snapshot of missing coordinates, taken at construction.
    missing_cells: Vec<(usize, usize)>,
}

impl NeighborMeanInterpolator {
    /// Take ownership of the table and snapshot its missing cells.
    pub fn new(table: Table) -> Self {
        let missing_cells = table.missing_cells();
        debug!(
            missing = missing_cells.len(),
            rows = table.nrows(),
            cols = table.ncols(),
            "Captured missing-cell snapshot"
        );
        Self {
            table,
            missing_cells,
        }
    }

    /// Missing-aware mean of the current values at the given coordinates.
    fn neighbor_mean(&self, neighbors: &[(usize, usize)]) -> f64 {
        let values: Vec<f64> = neighbors
            .iter()
            .map(|&(r, c)| self.table.get(r, c))
            .collect();
        common::nan_mean(&values)
    }
}

impl Interpolator for NeighborMeanInterpolator {
    fn interpolate(&mut self, use_diagonals: bool) -> Result<()> {
        let nrows = self.table.nrows();
        let ncols = self.table.ncols();

        for &(row, col) in &self.missing_cells {
            let neighbors = common::neighbor_indices(row, col, nrows, ncols, use_diagonals);
            let new_val = self.neighbor_mean(&neighbors);
            if new_val.is_nan() {
                // Fatal: cells filled earlier in this pass stay filled, but
                // the call as a whole reports failure.
                return Err(GridfillError::UnresolvableCell { row, col });
            }
            self.table.set(row, col, new_val);
        }
        Ok(())
    }

    fn table(&self) -> &Table {
        &self.table
    }

    fn into_table(self: Box<Self>) -> Table {
        self.table
    }

    fn name(&self) -> &str {
        "neighbor-mean"
    }
}
