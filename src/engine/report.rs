//! Report assembly for Q/R matrix pairs.
//!
//! ## Purpose
//!
//! This module composes the validator, the property analyzer and the
//! statistics engine into the reports returned to callers: the structural
//! analysis of a pair and the full report (statistics, analysis, timestamp).
//!
//! ## Design notes
//!
//! * **Single home for pair policy**: Dimension compatibility and the choice of
//!   which check applies to which matrix (orthogonality for Q, upper-triangular
//!   for R) live here only.
//! * **All or nothing**: A report is returned complete or not at all.
//! * **Injectable clock**: `*_at` variants take the timestamp explicitly.
//!
//! ## Key concepts
//!
//! 1. Validate Q, then R.
//! 2. Check that Q's column count equals R's row count.
//! 3. Summarize the combined values.
//! 4. Analyze each matrix and the pair-specific properties.
//! 5. Stamp and return.
//!
//! ## Non-goals
//!
//! * This module does not compute or verify the product `Q * R`.

// External dependencies
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use serde_json::Value;

// Internal dependencies
use crate::analysis::properties::{MatrixInfo, PropertyAnalyzer};
use crate::engine::validator::Validator;
use crate::evaluation::statistics::{StatisticsEngine, StatisticsReport};
use crate::primitives::errors::Result;
use crate::primitives::matrix::{Matrix, MatrixLabel};

// ============================================================================
// Report Types
// ============================================================================

/// Properties that only make sense for a specific matrix of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrValidations {
    /// Q satisfies `Q * Q^T ≈ I`.
    pub q_is_orthogonal: bool,

    /// R has negligible entries below its diagonal.
    pub r_is_upper_triangular: bool,
}

/// Structural analysis of a Q/R pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Properties of Q.
    pub matrix_q: MatrixInfo,

    /// Properties of R.
    pub matrix_r: MatrixInfo,

    /// Pair-specific checks.
    pub validations: QrValidations,
}

/// Statistics and analysis of a Q/R pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullReport {
    /// Statistics over the combined values of Q and R.
    pub statistics: StatisticsReport,

    /// Structural analysis.
    pub matrix_analysis: AnalysisReport,

    /// Generation time.
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Report Generator
// ============================================================================

/// Orchestrates validation, analysis and statistics for a Q/R pair.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Analyze the structure of a validated pair.
    pub fn analyze_matrices(q: &Matrix, r: &Matrix) -> AnalysisReport {
        info!("analyzing matrix properties (Q {}, R {})", q.dimensions(), r.dimensions());

        let report = AnalysisReport {
            matrix_q: PropertyAnalyzer::matrix_info(q, "Q"),
            matrix_r: PropertyAnalyzer::matrix_info(r, "R"),
            validations: QrValidations {
                q_is_orthogonal: PropertyAnalyzer::is_orthogonal(q.as_rows()),
                r_is_upper_triangular: PropertyAnalyzer::is_upper_triangular(r.as_rows()),
            },
        };

        info!("matrix analysis completed");
        report
    }

    /// Full report for raw candidates, stamped with the current time.
    pub fn generate_full_report(q: &Value, r: &Value) -> Result<FullReport> {
        Self::generate_full_report_at(q, r, Utc::now())
    }

    /// Full report for raw candidates, stamped with `timestamp`.
    ///
    /// # Errors
    ///
    /// * `InvalidMatrix` naming Q or R if either fails validation (Q is checked first).
    /// * `IncompatibleDimensions` if Q's column count differs from R's row count.
    pub fn generate_full_report_at(
        q: &Value,
        r: &Value,
        timestamp: DateTime<Utc>,
    ) -> Result<FullReport> {
        let q = Validator::validate_matrix(MatrixLabel::Q, q)?;
        let r = Validator::validate_matrix(MatrixLabel::R, r)?;
        Self::full_report_at(&q, &r, timestamp)
    }

    /// Full report for a validated pair, stamped with the current time.
    pub fn full_report(q: &Matrix, r: &Matrix) -> Result<FullReport> {
        Self::full_report_at(q, r, Utc::now())
    }

    /// Full report for a validated pair, stamped with `timestamp`.
    pub fn full_report_at(q: &Matrix, r: &Matrix, timestamp: DateTime<Utc>) -> Result<FullReport> {
        Validator::validate_qr_dimensions(q, r)?;
        Self::assemble_at(q, r, timestamp)
    }

    /// Statistics, analysis and timestamp for a pair whose dimensions were
    /// already checked with [`Validator::validate_qr_dimensions`].
    pub(crate) fn assemble_at(
        q: &Matrix,
        r: &Matrix,
        timestamp: DateTime<Utc>,
    ) -> Result<FullReport> {
        info!("generating full report (Q {}, R {})", q.dimensions(), r.dimensions());

        let values = StatisticsEngine::flatten(&[q, r]);
        let statistics = StatisticsEngine::summarize(&values)?;
        let matrix_analysis = Self::analyze_matrices(q, r);

        Ok(FullReport {
            statistics,
            matrix_analysis,
            timestamp,
        })
    }
}
