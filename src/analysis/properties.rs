//! Structural property checks for single matrices.
//!
//! ## Purpose
//!
//! This module derives structural facts about a matrix: its shape, whether it
//! is square, diagonal, upper-triangular, and whether it is orthogonal
//! (`M * M^T ≈ I`).
//!
//! ## Design notes
//!
//! * **Pure**: Every check is a read-only predicate over borrowed rows.
//! * **Defensive**: Checks accept any `&[R]` of rows. Empty or ragged input
//!   degrades to `false` (or a `0x0` shape) instead of panicking; validated
//!   [`Matrix`] values never hit these paths.
//! * **Fixed tolerances**: See [`crate::math::tolerance`].
//!
//! ## Key concepts
//!
//! * **Diagonal**: square, every off-diagonal entry negligible.
//! * **Upper-triangular**: square, every entry with `row > col` negligible.
//! * **Orthogonal**: square, `dot(row_i, row_j)` within `1e-6` of the
//!   Kronecker delta for every pair. O(n³).
//!
//! ## Non-goals
//!
//! * This module does not know which matrix of a QR pair it is looking at.

// External dependencies
use serde::Serialize;

// Internal dependencies
use crate::math::tolerance::{ORTHOGONALITY_TOLERANCE, approx_eq, is_negligible};
use crate::primitives::matrix::{Dimensions, Matrix};

// ============================================================================
// Matrix Info
// ============================================================================

/// Snapshot of the structural properties of one matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixInfo {
    /// Caller-supplied name (e.g. `"Q"`).
    pub label: String,

    /// Row and column count.
    pub dimensions: Dimensions,

    /// Rows equal columns.
    pub is_square: bool,

    /// Square with negligible off-diagonal entries.
    pub is_diagonal: bool,

    /// Square with negligible sub-diagonal entries.
    pub is_upper_triangular: bool,
}

// ============================================================================
// Property Analyzer
// ============================================================================

/// Structural predicates over row-major matrices.
pub struct PropertyAnalyzer;

impl PropertyAnalyzer {
    /// Row count and first-row length; `0x0` for an empty input.
    pub fn dimensions<R: AsRef<[f64]>>(rows: &[R]) -> Dimensions {
        match rows.first() {
            Some(first) => Dimensions::new(rows.len(), first.as_ref().len()),
            None => Dimensions::default(),
        }
    }

    /// Whether the row count equals the first row's length. False when empty.
    pub fn is_square<R: AsRef<[f64]>>(rows: &[R]) -> bool {
        !rows.is_empty() && Self::dimensions(rows).is_square()
    }

    /// Whether the matrix is square with every off-diagonal entry negligible.
    pub fn is_diagonal<R: AsRef<[f64]>>(rows: &[R]) -> bool {
        let Some(n) = Self::square_order(rows) else {
            return false;
        };

        rows.iter().enumerate().all(|(i, row)| {
            row.as_ref()
                .iter()
                .take(n)
                .enumerate()
                .all(|(j, &v)| i == j || is_negligible(v))
        })
    }

    /// Whether the matrix is square with every entry below the diagonal negligible.
    pub fn is_upper_triangular<R: AsRef<[f64]>>(rows: &[R]) -> bool {
        if Self::square_order(rows).is_none() {
            return false;
        }

        rows.iter()
            .enumerate()
            .skip(1)
            .all(|(i, row)| row.as_ref()[..i].iter().all(|&v| is_negligible(v)))
    }

    /// Whether `M * M^T` equals the identity within the orthogonality tolerance.
    ///
    /// # Complexity
    ///
    /// O(n³). `M * M^T` is symmetric, so only the upper triangle is computed.
    pub fn is_orthogonal<R: AsRef<[f64]>>(rows: &[R]) -> bool {
        if Self::square_order(rows).is_none() {
            return false;
        }

        for (i, row_i) in rows.iter().enumerate() {
            let row_i = row_i.as_ref();
            for (j, row_j) in rows.iter().enumerate().skip(i) {
                let dot = dot(row_i, row_j.as_ref());
                let expected = if i == j { 1.0 } else { 0.0 };
                if !approx_eq(dot, expected, ORTHOGONALITY_TOLERANCE) {
                    return false;
                }
            }
        }

        true
    }

    /// Collect every single-matrix property under `label`.
    pub fn matrix_info(matrix: &Matrix, label: &str) -> MatrixInfo {
        let rows = matrix.as_rows();
        MatrixInfo {
            label: label.to_owned(),
            dimensions: matrix.dimensions(),
            is_square: Self::is_square(rows),
            is_diagonal: Self::is_diagonal(rows),
            is_upper_triangular: Self::is_upper_triangular(rows),
        }
    }

    /// Order `n` when the input is an n×n grid with every row of length `n`.
    fn square_order<R: AsRef<[f64]>>(rows: &[R]) -> Option<usize> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|row| row.as_ref().len() != n) {
            return None;
        }
        Some(n)
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (&x, &y)| acc + x * y)
}
