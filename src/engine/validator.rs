//! Input validation for matrices, QR pairs and service configuration.
//!
//! ## Purpose
//!
//! This module is the strict gate in front of the analysis and statistics
//! layers. It checks that a candidate is a well-formed rectangular matrix of
//! finite numbers, that a Q/R pair can be composed, and that builder
//! parameters are usable.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first rule violated.
//! * **Ordered rules**: Each rule is checked over the whole candidate before the
//!   next rule runs, so the reported defect is always the earliest rule broken:
//!   absent, not nested, empty, ragged, invalid value. Only the candidate and
//!   its first row are judged for nesting up front; later rows are checked for
//!   nesting and length together, in row order.
//! * **Parse, don't re-check**: A successful parse yields a [`Matrix`], which
//!   downstream layers accept without further checks.
//!
//! ## Invariants
//!
//! * Every `Matrix` produced here is non-empty, rectangular and finite.
//! * Validation logic is deterministic and side-effect free (apart from logging).
//!
//! ## Non-goals
//!
//! * This module does not coerce, clamp or repair invalid input.
//! * This module does not compute any property or statistic.

// External dependencies
use log::warn;
use serde_json::Value;

// Internal dependencies
use crate::primitives::errors::{QrStatsError, Result};
use crate::primitives::matrix::{Matrix, MatrixDefect, MatrixLabel};

// ============================================================================
// Validation Result
// ============================================================================

/// Outcome of validating a single candidate matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// The candidate is a well-formed matrix.
    Valid,

    /// The candidate broke a rule.
    Invalid(MatrixDefect),
}

impl ValidationResult {
    /// Whether the candidate passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rule that failed, if any.
    #[inline]
    pub fn defect(&self) -> Option<MatrixDefect> {
        match self {
            Self::Valid => None,
            Self::Invalid(defect) => Some(*defect),
        }
    }

    /// Human-readable reason for a failure.
    pub fn reason(&self) -> Option<String> {
        self.defect().map(|d| d.to_string())
    }
}

impl<T> From<core::result::Result<T, MatrixDefect>> for ValidationResult {
    fn from(result: core::result::Result<T, MatrixDefect>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(defect) => Self::Invalid(defect),
        }
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for matrices and configuration.
///
/// Provides static methods; all of them fail fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Single Matrix Validation
    // ========================================================================

    /// Check that `candidate` is a well-formed matrix.
    pub fn validate(candidate: &Value) -> ValidationResult {
        Self::parse(candidate).into()
    }

    /// Parse a deserialized JSON value into a [`Matrix`].
    pub fn parse(candidate: &Value) -> core::result::Result<Matrix, MatrixDefect> {
        // Rule 1: present
        if candidate.is_null() {
            return Err(MatrixDefect::Absent);
        }

        // Rule 2: sequence of sequences, judged on the candidate and its first row
        let rows = candidate
            .as_array()
            .ok_or(MatrixDefect::NotNested { row: None })?;
        let first = rows
            .first()
            .map(|row| row.as_array().ok_or(MatrixDefect::NotNested { row: Some(0) }))
            .transpose()?;

        // Rule 3: at least one row and one column
        let expected = match first {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixDefect::Empty),
        };

        // Rule 4: every row a sequence of the first row's length, in row order
        let mut nested = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let cells = row
                .as_array()
                .ok_or(MatrixDefect::NotNested { row: Some(i) })?;
            if cells.len() != expected {
                return Err(MatrixDefect::RaggedRows {
                    row: i,
                    expected,
                    found: cells.len(),
                });
            }
            nested.push(cells);
        }

        // Rule 5: finite numeric cells
        let mut parsed = Vec::with_capacity(rows.len());
        for (i, row) in nested.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(j, cell)| {
                    cell.as_f64()
                        .filter(|v| v.is_finite())
                        .ok_or(MatrixDefect::InvalidValue { row: i, col: j })
                })
                .collect::<core::result::Result<Vec<f64>, _>>()?;
            parsed.push(cells);
        }

        Ok(Matrix::from_validated(parsed))
    }

    /// Validate already-typed rows (rules 3 to 5) and wrap them in a [`Matrix`].
    pub fn parse_rows(rows: Vec<Vec<f64>>) -> core::result::Result<Matrix, MatrixDefect> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixDefect::Empty),
        };

        Self::check_rectangular(rows.iter().map(Vec::len), expected)?;

        for (i, row) in rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(MatrixDefect::InvalidValue { row: i, col: j });
            }
        }

        Ok(Matrix::from_validated(rows))
    }

    /// Parse `candidate` as matrix `label`, attributing failures to it.
    pub fn validate_matrix(label: MatrixLabel, candidate: &Value) -> Result<Matrix> {
        Self::parse(candidate).map_err(|defect| {
            warn!("matrix {} is invalid: {}", label, defect);
            QrStatsError::InvalidMatrix {
                matrix: label,
                defect,
            }
        })
    }

    // ========================================================================
    // Pair Validation
    // ========================================================================

    /// Check that `Q * R` is a well-formed product (columns of Q equal rows of R).
    pub fn validate_qr_dimensions(q: &Matrix, r: &Matrix) -> Result<()> {
        if q.cols() != r.rows() {
            warn!(
                "incompatible dimensions for QR factorization: Q is {}, R is {}",
                q.dimensions(),
                r.dimensions()
            );
            return Err(QrStatsError::IncompatibleDimensions {
                q: q.dimensions(),
                r: r.dimensions(),
            });
        }
        Ok(())
    }

    /// Check that neither dimension of `matrix` exceeds `max`.
    pub fn validate_size(label: MatrixLabel, matrix: &Matrix, max: usize) -> Result<()> {
        if matrix.rows() > max || matrix.cols() > max {
            warn!(
                "matrix {} is {}, exceeding the {}x{} limit",
                label,
                matrix.dimensions(),
                max,
                max
            );
            return Err(QrStatsError::MatrixTooLarge {
                matrix: label,
                dimensions: matrix.dimensions(),
                max,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the maximum accepted matrix size.
    pub fn validate_max_matrix_size(max: usize) -> Result<()> {
        if max == 0 {
            return Err(QrStatsError::InvalidMaxMatrixSize(max));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<()> {
        if let Some(param) = duplicate_param {
            return Err(QrStatsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    fn check_rectangular<I>(lengths: I, expected: usize) -> core::result::Result<(), MatrixDefect>
    where
        I: IntoIterator<Item = usize>,
    {
        match lengths
            .into_iter()
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            Some((row, found)) => Err(MatrixDefect::RaggedRows {
                row,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixDefect;

    fn try_from(rows: Vec<Vec<f64>>) -> core::result::Result<Self, Self::Error> {
        Validator::parse_rows(rows)
    }
}
