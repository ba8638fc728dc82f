//! Aggregate statistics over the combined values of several matrices.
//!
//! ## Purpose
//!
//! This module flattens the cells of one or more matrices into a single value
//! sequence and summarizes it into basic (max, min, sum, average, count) and
//! advanced (median, variance, standard deviation) statistics.
//!
//! ## Design notes
//!
//! * **Two tiers**: [`StatisticsEngine::extract_values`] walks raw JSON values
//!   leniently, skipping anything that is not a sequence or not a finite
//!   number; [`StatisticsEngine::flatten`] reads validated [`Matrix`] values.
//! * **Single checked failure**: summarizing an empty value set returns
//!   `QrStatsError::EmptyValueSet` rather than zeros.
//! * **Canonical order**: values are collected matrix by matrix, row by row,
//!   left to right.
//!
//! ## Invariants
//!
//! * Every statistic in a report is computed from the same value sequence.
//! * Variance is the population variance (divisor `n`).
//!
//! ## Non-goals
//!
//! * This module does not validate matrix structure.

// External dependencies
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

// Internal dependencies
use crate::math::descriptive;
use crate::primitives::errors::{QrStatsError, Result};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Reports
// ============================================================================

/// Extrema, total, mean and count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasicStatistics {
    /// Largest value.
    pub max: f64,

    /// Smallest value.
    pub min: f64,

    /// Sum of all values.
    pub sum: f64,

    /// Arithmetic mean.
    pub average: f64,

    /// Number of values.
    pub count: usize,
}

/// Order and spread statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStatistics {
    /// Median value.
    pub median: f64,

    /// Population variance.
    pub variance: f64,

    /// Square root of the population variance.
    pub standard_deviation: f64,
}

/// Basic and advanced statistics of one value set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// Extrema, total, mean and count.
    pub basic: BasicStatistics,

    /// Median, variance and standard deviation.
    pub advanced: AdvancedStatistics,
}

// ============================================================================
// Statistics Engine
// ============================================================================

/// Flattening and summarizing of matrix values.
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Collect every finite number from loosely-shaped matrices.
    ///
    /// Entries that are not sequences (at matrix or row level) and cells that
    /// are not finite numbers are skipped silently.
    pub fn extract_values<'a, I>(matrices: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut values = Vec::new();

        for matrix in matrices {
            let Some(rows) = matrix.as_array() else {
                continue;
            };

            for row in rows {
                let Some(cells) = row.as_array() else {
                    continue;
                };

                values.extend(
                    cells
                        .iter()
                        .filter_map(Value::as_f64)
                        .filter(|v| v.is_finite()),
                );
            }
        }

        values
    }

    /// Collect every value of validated matrices in canonical order.
    pub fn flatten(matrices: &[&Matrix]) -> Vec<f64> {
        matrices.iter().flat_map(|m| m.values()).collect()
    }

    /// Summarize a value set.
    ///
    /// # Errors
    ///
    /// `QrStatsError::EmptyValueSet` if `values` is empty.
    pub fn summarize(values: &[f64]) -> Result<StatisticsReport> {
        if values.is_empty() {
            error!("no valid values found in the matrices");
            return Err(QrStatsError::EmptyValueSet);
        }

        let average = descriptive::average(values);
        let basic = BasicStatistics {
            max: descriptive::max(values)?,
            min: descriptive::min(values)?,
            sum: descriptive::sum(values),
            average,
            count: values.len(),
        };

        let advanced = AdvancedStatistics {
            median: descriptive::median(values)?,
            variance: descriptive::variance(values, average),
            standard_deviation: descriptive::standard_deviation(values, average),
        };

        Ok(StatisticsReport { basic, advanced })
    }

    /// Statistics over the combined values of two loosely-shaped matrices.
    ///
    /// Uses the lenient [`extract_values`](Self::extract_values), so callers
    /// may pass matrices that never went through the validator.
    pub fn calculate_statistics(matrix_a: &Value, matrix_b: &Value) -> Result<StatisticsReport> {
        info!("calculating statistics over matrix pair");

        let values = Self::extract_values([matrix_a, matrix_b]);
        let report = Self::summarize(&values)?;

        info!("statistics calculated over {} values", report.basic.count);
        Ok(report)
    }
}
