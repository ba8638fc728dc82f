//! Error types for matrix validation, analysis and statistics.
//!
//! ## Purpose
//!
//! This module defines the `QrStatsError` enum, which covers every failure the
//! crate can report: malformed matrices, incompatible QR pairs, empty value
//! sets reaching the statistics engine, and invalid service configuration.
//!
//! ## Design notes
//!
//! * **Typed**: Each variant carries the structured context needed to render
//!   field-level feedback (which matrix, which shape, which limit).
//! * **Classified**: `kind()` separates validation failures (caller input) from
//!   computation failures (caller invariant violations) and configuration errors.
//! * **Comparable**: Implements `Clone` and `PartialEq` so tests can match on
//!   exact errors.
//!
//! ## Invariants
//!
//! * A failure is always reported whole; no variant wraps a partial report.
//!
//! ## Non-goals
//!
//! * This module does not map errors to transport status codes.

// External dependencies
use thiserror::Error;

// Internal dependencies
use crate::primitives::matrix::{Dimensions, MatrixDefect, MatrixLabel};

/// Crate-wide result alias.
pub type Result<T, E = QrStatsError> = core::result::Result<T, E>;

/// Broad family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incompatible caller input.
    Validation,

    /// A caller invariant was violated after validation (e.g. empty value set).
    Computation,

    /// Invalid builder parameters or environment values.
    Configuration,
}

/// Errors produced by validation, analysis and statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QrStatsError {
    /// A required matrix was not supplied.
    #[error("matrix {matrix} is required")]
    MissingMatrix {
        /// Which matrix is missing.
        matrix: MatrixLabel,
    },

    /// A matrix failed structural validation.
    #[error("invalid matrix {matrix}: {defect}")]
    InvalidMatrix {
        /// Which matrix failed.
        matrix: MatrixLabel,
        /// First rule the matrix violated.
        defect: MatrixDefect,
    },

    /// A matrix exceeds the configured size limit.
    #[error("matrix {matrix} is {dimensions}, matrices cannot exceed {max}x{max}")]
    MatrixTooLarge {
        /// Which matrix is too large.
        matrix: MatrixLabel,
        /// Its actual shape.
        dimensions: Dimensions,
        /// Configured limit for rows and columns.
        max: usize,
    },

    /// Column count of Q does not match row count of R.
    #[error("incompatible dimensions for QR factorization: Q is {q}, R is {r}")]
    IncompatibleDimensions {
        /// Shape of Q.
        q: Dimensions,
        /// Shape of R.
        r: Dimensions,
    },

    /// The request body could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A descriptive statistic that has no value for an empty input was asked for one.
    #[error("input values are empty")]
    EmptyInput,

    /// No numeric values were found across the supplied matrices.
    #[error("no valid values found in the matrices")]
    EmptyValueSet,

    /// Maximum matrix size must be at least 1.
    #[error("invalid max_matrix_size: {0} (must be at least 1)")]
    InvalidMaxMatrixSize(usize),

    /// An environment variable held an unusable value.
    #[error("invalid value for {variable}: {value:?}")]
    InvalidEnvironment {
        /// Variable name.
        variable: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },

    /// A builder parameter was set more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl QrStatsError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMatrix { .. }
            | Self::InvalidMatrix { .. }
            | Self::MatrixTooLarge { .. }
            | Self::IncompatibleDimensions { .. }
            | Self::InvalidRequest(_) => ErrorKind::Validation,
            Self::EmptyInput | Self::EmptyValueSet => ErrorKind::Computation,
            Self::InvalidMaxMatrixSize(_)
            | Self::InvalidEnvironment { .. }
            | Self::DuplicateParameter { .. } => ErrorKind::Configuration,
        }
    }

    /// Whether the failure was caused by caller input.
    #[inline]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Request field a validation failure is attributable to.
    ///
    /// Returns `None` for computation and configuration errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingMatrix { matrix } | Self::InvalidMatrix { matrix, .. } => {
                Some(matrix.field_name())
            }
            Self::MatrixTooLarge { .. } => Some("size"),
            Self::IncompatibleDimensions { .. } => Some("dimensions"),
            Self::InvalidRequest(_) => Some("request"),
            _ => None,
        }
    }
}
