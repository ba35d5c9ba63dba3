//! In-memory table model for gridfill.
//!
//! This module defines the dense rectangular table that flows through the
//! pipeline, backed by an ndarray array. Missing entries are carried in-band
//! as `f64::NAN`: every (row, col) slot exists and holds either a concrete
//! value or the missing sentinel.
//!
//! Ownership is strictly sequential: the loader builds the table, the
//! interpolator takes it by move and mutates it in place, and the exporter
//! consumes it read-only. There is exactly one owner at a time.

use ndarray::{Array2, ArrayView1};

use crate::error::{GridfillError, Result};

/// A dense, rectangular table of floating-point values.
#[derive(Debug, Clone)]
pub struct Table {
    data: Array2<f64>,
}

impl Table {
    /// Build a table from parsed rows.
    ///
    /// All rows must have the same length. The loader already rejects ragged
    /// input at the CSV layer, but the constructor checks again so the
    /// invariant holds no matter who builds the table.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(GridfillError::InvalidParameter {
                    param: "rows".to_string(),
                    message: format!(
                        "row {} has {} columns, expected {}",
                        i,
                        row.len(),
                        ncols
                    ),
                });
            }
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((nrows, ncols), flat).map_err(|e| {
            GridfillError::InvalidParameter {
                param: "rows".to_string(),
                message: format!("rows do not form a rectangular table: {}", e),
            }
        })?;

        Ok(Self { data })
    }

    /// Number of rows in the table.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns in the table.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// True if the table holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at (row, col). Panics if out of bounds, like indexing an array.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }

    /// Overwrite the value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[[row, col]] = value;
    }

    /// True if the cell at (row, col) holds the missing sentinel.
    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.data[[row, col]].is_nan()
    }

    /// Coordinates of every missing cell, in row-major scan order.
    ///
    /// This is a snapshot of the table at call time; callers that mutate the
    /// table afterwards are responsible for knowing the list is stale.
    pub fn missing_cells(&self) -> Vec<(usize, usize)> {
        self.data
            .indexed_iter()
            .filter(|(_, v)| v.is_nan())
            .map(|((row, col), _)| (row, col))
            .collect()
    }

    /// Count of missing cells currently in the table.
    pub fn missing_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Iterate over the rows of the table, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.rows().into_iter()
    }
}
