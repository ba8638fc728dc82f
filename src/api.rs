//! High-level API for analyzing Q/R matrix pairs.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. It implements a fluent
//! builder for the request limits and a built analyzer exposing the three
//! granularities callers need: the full report, basic statistics only, and
//! structural analysis only.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Environment-aware**: `from_env()` reads `MAX_MATRIX_SIZE` as a fallback
//!   for values not set explicitly.
//! * **Request gate**: Presence, validity and size limits are enforced here,
//!   before the core engine runs.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`QrStatsBuilder`] via `QrStats::new()` (or `QrStats::from_env()`).
//! 2. Chain configuration methods (`.max_matrix_size()`).
//! 3. Call `.build()` to get a [`QrAnalyzer`].
//!
//! ### Entry Points
//!
//! * [`QrAnalyzer::full_report`]: strict gate, then statistics and analysis.
//! * [`QrAnalyzer::basic_statistics`]: presence check only, lenient value extraction.
//! * [`QrAnalyzer::analysis`]: strict gate, then structural analysis.

// External dependencies
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Internal dependencies
use crate::engine::report::ReportGenerator;
use crate::engine::validator::Validator;
use crate::evaluation::statistics::StatisticsEngine;
use crate::primitives::matrix::{Matrix, MatrixLabel};

// Publicly re-exported types
pub use crate::analysis::properties::{MatrixInfo, PropertyAnalyzer};
pub use crate::engine::report::{AnalysisReport, FullReport, QrValidations};
pub use crate::evaluation::statistics::{AdvancedStatistics, BasicStatistics, StatisticsReport};
pub use crate::primitives::errors::{ErrorKind, QrStatsError, Result};

/// Default limit on the rows and columns of each matrix.
pub const DEFAULT_MAX_MATRIX_SIZE: usize = 1000;

/// Environment variable read by [`QrStatsBuilder::from_env`].
pub const MAX_MATRIX_SIZE_ENV: &str = "MAX_MATRIX_SIZE";

// ============================================================================
// Request
// ============================================================================

/// A deserialized request carrying the two matrices of a QR pair.
///
/// A field that is missing or `null` in the JSON body is `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatisticsRequest {
    /// Candidate for Q.
    #[serde(rename = "matrixQ")]
    pub matrix_q: Option<Value>,

    /// Candidate for R.
    #[serde(rename = "matrixR")]
    pub matrix_r: Option<Value>,
}

impl StatisticsRequest {
    /// Build a request from two candidates.
    pub fn new(matrix_q: Value, matrix_r: Value) -> Self {
        Self {
            matrix_q: Some(matrix_q),
            matrix_r: Some(matrix_r),
        }
    }

    /// Decode a JSON request body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| QrStatsError::InvalidRequest(e.to_string()))
    }

    fn require(&self) -> Result<(&Value, &Value)> {
        let q = self
            .matrix_q
            .as_ref()
            .ok_or(QrStatsError::MissingMatrix {
                matrix: MatrixLabel::Q,
            })?;
        let r = self
            .matrix_r
            .as_ref()
            .ok_or(QrStatsError::MissingMatrix {
                matrix: MatrixLabel::R,
            })?;
        Ok((q, r))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring request limits.
#[derive(Debug, Clone, Default)]
pub struct QrStatsBuilder {
    /// Largest accepted row or column count.
    pub max_matrix_size: Option<usize>,

    /// Fallback read from the environment.
    pub(crate) env_max_matrix_size: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    /// Error found while reading the environment, reported by `build()`.
    pub(crate) deferred_error: Option<QrStatsError>,
}

impl QrStatsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with fallbacks read from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_map(|key| std::env::var(key).ok())
    }

    /// Create a builder with fallbacks read through `lookup`.
    ///
    /// An unparsable value is reported when `build()` is called.
    pub fn from_env_map<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::new();
        if let Some(raw) = lookup(MAX_MATRIX_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => builder.env_max_matrix_size = Some(n),
                Err(_) => {
                    builder.deferred_error = Some(QrStatsError::InvalidEnvironment {
                        variable: MAX_MATRIX_SIZE_ENV,
                        value: raw,
                    })
                }
            }
        }
        builder
    }

    /// Set the largest accepted row or column count (default: 1000).
    pub fn max_matrix_size(mut self, max: usize) -> Self {
        if self.max_matrix_size.is_some() {
            self.duplicate_param = Some("max_matrix_size");
        }
        self.max_matrix_size = Some(max);
        self
    }

    /// Validate the configuration and build the analyzer.
    pub fn build(self) -> Result<QrAnalyzer> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_matrix_size = self
            .max_matrix_size
            .or(self.env_max_matrix_size)
            .unwrap_or(DEFAULT_MAX_MATRIX_SIZE);
        Validator::validate_max_matrix_size(max_matrix_size)?;

        Ok(QrAnalyzer { max_matrix_size })
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Configured entry point for Q/R pair requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrAnalyzer {
    max_matrix_size: usize,
}

impl Default for QrAnalyzer {
    fn default() -> Self {
        Self {
            max_matrix_size: DEFAULT_MAX_MATRIX_SIZE,
        }
    }
}

impl QrAnalyzer {
    /// Largest accepted row or column count.
    #[inline]
    pub fn max_matrix_size(&self) -> usize {
        self.max_matrix_size
    }

    /// Run the strict request gate.
    ///
    /// Checks, in order: both matrices present (Q first), Q valid, R valid,
    /// both within the size limit, and Q's columns equal to R's rows.
    pub fn validate_request(&self, request: &StatisticsRequest) -> Result<(Matrix, Matrix)> {
        let (q, r) = request.require()?;

        let q = Validator::validate_matrix(MatrixLabel::Q, q)?;
        let r = Validator::validate_matrix(MatrixLabel::R, r)?;

        Validator::validate_size(MatrixLabel::Q, &q, self.max_matrix_size)?;
        Validator::validate_size(MatrixLabel::R, &r, self.max_matrix_size)?;

        Validator::validate_qr_dimensions(&q, &r)?;

        debug!("request validated (Q {}, R {})", q.dimensions(), r.dimensions());
        Ok((q, r))
    }

    /// Statistics and structural analysis of the pair.
    pub fn full_report(&self, request: &StatisticsRequest) -> Result<FullReport> {
        self.full_report_at(request, Utc::now())
    }

    /// Like [`full_report`](Self::full_report), stamped with `timestamp`.
    pub fn full_report_at(
        &self,
        request: &StatisticsRequest,
        timestamp: DateTime<Utc>,
    ) -> Result<FullReport> {
        // The gate has run the dimension check.
        let (q, r) = self.validate_request(request)?;
        ReportGenerator::assemble_at(&q, &r, timestamp)
    }

    /// Basic statistics over every finite number found in the pair.
    ///
    /// Only presence is checked; malformed rows and cells are skipped.
    pub fn basic_statistics(&self, request: &StatisticsRequest) -> Result<BasicStatistics> {
        let (q, r) = request.require()?;
        StatisticsEngine::calculate_statistics(q, r).map(|report| report.basic)
    }

    /// Structural analysis of the pair.
    pub fn analysis(&self, request: &StatisticsRequest) -> Result<AnalysisReport> {
        let (q, r) = self.validate_request(request)?;
        Ok(ReportGenerator::analyze_matrices(&q, &r))
    }
}
