//! # qr-stats — Validation, Structure and Statistics for QR Matrix Pairs
//!
//! Checks a pair of matrices produced by a QR factorization and reports on
//! them: the matrices are validated, their structural properties are derived,
//! and descriptive statistics are computed over their combined values.
//!
//! ## What is checked?
//!
//! A QR factorization writes a matrix `A` as `A = Q * R`, where `Q` is
//! orthogonal (`Q * Q^T = I`) and `R` is upper-triangular. Given a candidate
//! pair, this crate:
//!
//! 1. Rejects malformed input (absent, not nested, empty, ragged rows,
//!    non-finite or non-numeric cells), naming the matrix and the first rule broken.
//! 2. Rejects pairs whose product `Q * R` is not defined (columns of Q must
//!    equal rows of R).
//! 3. Reports the shape of each matrix and whether it is square, diagonal and
//!    upper-triangular, plus whether Q is orthogonal and R upper-triangular.
//! 4. Reports max, min, sum, average, count, median, population variance and
//!    standard deviation over every cell of both matrices.
//!
//! The factorization itself is not computed.
//!
//! ## Quick Start
//!
//! ### Full report
//!
//! ```rust
//! use qr_stats::prelude::*;
//! use serde_json::json;
//!
//! let analyzer = QrStats::new().max_matrix_size(100).build()?;
//!
//! let request = StatisticsRequest::new(
//!     json!([[1.0, 0.0], [0.0, 1.0]]),
//!     json!([[2.0, 3.0], [0.0, 4.0]]),
//! );
//!
//! let report = analyzer.full_report(&request)?;
//!
//! assert_eq!(report.statistics.basic.max, 4.0);
//! assert_eq!(report.statistics.basic.count, 8);
//! assert!(report.matrix_analysis.validations.q_is_orthogonal);
//! assert!(report.matrix_analysis.validations.r_is_upper_triangular);
//! # Result::<(), QrStatsError>::Ok(())
//! ```
//!
//! ### Decoding a JSON body
//!
//! ```rust
//! use qr_stats::prelude::*;
//!
//! let body = r#"{"matrixQ": [[1, 0], [0, 1]], "matrixR": [[2, 3], [0, 4]]}"#;
//! let request = StatisticsRequest::from_json(body)?;
//!
//! let analysis = QrStats::new().build()?.analysis(&request)?;
//! assert_eq!(analysis.matrix_q.dimensions.to_string(), "2x2");
//! # Result::<(), QrStatsError>::Ok(())
//! ```
//!
//! ### Handling failures
//!
//! Validation failures carry the matrix and rule that failed, and can be told
//! apart from computation failures via [`QrStatsError::kind`].
//!
//! ```rust
//! use qr_stats::prelude::*;
//! use serde_json::json;
//!
//! let request = StatisticsRequest::new(
//!     json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
//!     json!([[1.0, 0.0], [0.0, 1.0]]),
//! );
//!
//! let err = QrStats::new().build()?.full_report(&request).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! assert_eq!(err.field(), Some("dimensions"));
//! # Result::<(), QrStatsError>::Ok(())
//! ```
//!
//! ## Building blocks
//!
//! The components behind the analyzer can be used on their own:
//!
//! * [`Validator`]: strict gate turning a `serde_json::Value` into a [`Matrix`].
//! * [`PropertyAnalyzer`]: shape, square, diagonal, upper-triangular and
//!   orthogonality checks.
//! * [`StatisticsEngine`]: value extraction and summary statistics.
//! * [`ReportGenerator`]: analysis and full reports for a pair.
//!
//! ## Tolerances
//!
//! Diagonal and upper-triangular checks treat entries with magnitude at most
//! `1e-10` as zero. Orthogonality allows each entry of `Q * Q^T` to differ from
//! the identity by at most `1e-6`. Neither is configurable.
//!
//! ## Configuration
//!
//! | Parameter         | Default | Environment       | Description                          |
//! |-------------------|---------|-------------------|--------------------------------------|
//! | `max_matrix_size` | 1000    | `MAX_MATRIX_SIZE` | Largest accepted row or column count |
//!
//! ## Logging
//!
//! Events are emitted through the [`log`](https://docs.rs/log) facade; install
//! any compatible logger to see them.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and errors.
//
// Contains the validated `Matrix`, shape descriptors and error types.
mod primitives;

// Layer 2: Math - pure numeric functions.
//
// Contains the fixed tolerances and descriptive statistics.
mod math;

// Layer 3: Analysis - single-matrix structural properties.
mod analysis;

// Layer 4: Evaluation - aggregate statistics over matrix values.
mod evaluation;

// Layer 5: Engine - validation and report orchestration.
mod engine;

// Layer 6: High-level API.
//
// Provides the `QrStatsBuilder` and the built `QrAnalyzer`.
mod api;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use crate::analysis::properties::{MatrixInfo, PropertyAnalyzer};
pub use crate::api::{
    DEFAULT_MAX_MATRIX_SIZE, MAX_MATRIX_SIZE_ENV, QrAnalyzer, QrStatsBuilder, StatisticsRequest,
};
pub use crate::engine::report::{AnalysisReport, FullReport, QrValidations, ReportGenerator};
pub use crate::engine::validator::{ValidationResult, Validator};
pub use crate::evaluation::statistics::{
    AdvancedStatistics, BasicStatistics, StatisticsEngine, StatisticsReport,
};
pub use crate::math::descriptive;
pub use crate::math::tolerance::{ORTHOGONALITY_TOLERANCE, STRUCTURAL_TOLERANCE};
pub use crate::primitives::errors::{ErrorKind, QrStatsError, Result};
pub use crate::primitives::matrix::{Dimensions, Matrix, MatrixDefect, MatrixLabel};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use qr_stats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AnalysisReport, BasicStatistics, ErrorKind, FullReport, QrAnalyzer,
        QrStatsBuilder as QrStats, QrStatsError, StatisticsReport, StatisticsRequest,
    };
    pub use crate::engine::validator::{ValidationResult, Validator};
    pub use crate::primitives::matrix::{Dimensions, Matrix, MatrixDefect, MatrixLabel};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal structural analysis.
    pub mod analysis {
        pub use crate::analysis::*;
    }
    /// Internal statistics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal validation and orchestration.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
