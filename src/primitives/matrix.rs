//! Validated matrix storage and shape descriptors.
//!
//! ## Purpose
//!
//! This module defines the `Matrix` type handed to the analysis and statistics
//! layers, together with `Dimensions`, the `MatrixLabel` used to attribute
//! failures to Q or R, and the `MatrixDefect` describing why a candidate was
//! rejected.
//!
//! ## Design notes
//!
//! * **Row-major**: Rows are stored as owned vectors, matching the nested
//!   sequences the caller deserializes.
//! * **Validated construction**: A `Matrix` can only be built by the validator
//!   (`Validator::parse`, `Validator::parse_rows` or `TryFrom<Vec<Vec<f64>>>`).
//! * **Immutable**: No method mutates the stored values.
//!
//! ## Invariants
//!
//! * At least one row and one column.
//! * Every row has the same length.
//! * Every value is finite.
//!
//! ## Non-goals
//!
//! * This module does not provide arithmetic (products, factorizations).

// External dependencies
use core::fmt;
use core::ops::Index;
use serde::Serialize;

// ============================================================================
// Labels and Shapes
// ============================================================================

/// Identifies a matrix of a QR pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixLabel {
    /// The orthogonal factor.
    Q,

    /// The upper-triangular factor.
    R,
}

impl MatrixLabel {
    /// Request field carrying this matrix.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Q => "matrixQ",
            Self::R => "matrixR",
        }
    }
}

impl fmt::Display for MatrixLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Q => f.write_str("Q"),
            Self::R => f.write_str("R"),
        }
    }
}

/// Row and column count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns (length of the first row).
    pub cols: usize,
}

impl Dimensions {
    /// Create a new shape.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether rows equal columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ============================================================================
// Defects
// ============================================================================

/// First validation rule a candidate matrix violated.
///
/// Rules are checked in declaration order; indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixDefect {
    /// The candidate was null or missing.
    Absent,

    /// The candidate, or one of its rows, is not a sequence.
    NotNested {
        /// Offending row, or `None` when the candidate itself is not a sequence.
        row: Option<usize>,
    },

    /// No rows, or a first row with no columns.
    Empty,

    /// A row's length differs from the first row's length.
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell is not a finite number.
    InvalidValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },
}

impl fmt::Display for MatrixDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("matrix must not be absent"),
            Self::NotNested { row: None } => f.write_str("matrix must be a sequence of sequences"),
            Self::NotNested { row: Some(row) } => write!(
                f,
                "matrix must be a sequence of sequences (row {} is not a sequence)",
                row
            ),
            Self::Empty => f.write_str("matrix must not be empty"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "all rows must have equal length (row {} has {} columns, expected {})",
                row, found, expected
            ),
            Self::InvalidValue { row, col } => {
                write!(f, "invalid value at position [{}][{}]", row, col)
            }
        }
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// A validated, rectangular grid of finite values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Wrap rows that already passed validation.
    #[inline]
    pub(crate) fn from_validated(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(!rows.is_empty() && !rows[0].is_empty());
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Shape of the matrix.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows(), self.cols())
    }

    /// Borrow the rows.
    #[inline]
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Borrow row `i`, if present.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Value at `(i, j)`, if present.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Iterate over every value in row-then-column order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Consume the matrix, returning its rows.
    #[inline]
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.rows[i][j]
    }
}

impl AsRef<[Vec<f64>]> for Matrix {
    #[inline]
    fn as_ref(&self) -> &[Vec<f64>] {
        &self.rows
    }
}
