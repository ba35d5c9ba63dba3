//! Common utilities for interpolation algorithms.
//!
//! This module provides shared functionality used by interpolation methods:
//! the neighbor offset sets and the missing-aware mean.

/// Relative offsets of the four orthogonally adjacent cells
pub const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Relative offsets of the four diagonally adjacent cells
pub const DIAGONAL_OFFSETS: [(isize, isize); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Compute the in-bounds neighbor coordinates of a cell.
///
/// Applies the orthogonal offset set (plus the diagonal set when requested)
/// to (row, col) and discards any candidate outside `[0, nrows) x [0, ncols)`.
/// A corner cell simply ends up with fewer neighbors.
pub fn neighbor_indices(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
    use_diagonals: bool,
) -> Vec<(usize, usize)> {
    let mut offsets: Vec<(isize, isize)> = ORTHOGONAL_OFFSETS.to_vec();
    if use_diagonals {
        offsets.extend_from_slice(&DIAGONAL_OFFSETS);
    }

    let mut neighbors = Vec::with_capacity(offsets.len());
    for (dr, dc) in offsets {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || r >= nrows as isize || c < 0 || c >= ncols as isize {
            continue;
        }
        neighbors.push((r as usize, c as usize));
    }
    neighbors
}

/// Arithmetic mean of the non-NaN entries of `values`.
///
/// Entries carrying the missing sentinel contribute nothing to the sum and
/// do not count toward the denominator. Returns NaN when every entry is NaN
/// or the slice is empty, leaving the "mean is undefined" decision to the
/// caller.
pub fn nan_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
