//! Descriptive statistics over flat value sequences.
//!
//! ## Purpose
//!
//! This module provides the aggregate statistics reported for a QR pair:
//! extrema, sum, mean, median, population variance and standard deviation.
//!
//! ## Design notes
//!
//! * **Generic**: All functions are generic over `Float` types.
//! * **Loud on misuse**: `max`, `min` and `median` have no meaningful value
//!   for an empty input and return `QrStatsError::EmptyInput`.
//! * **Lenient helpers**: `average` and `variance` return zero for an empty
//!   input; the report pipeline rejects empty value sets before reaching them.
//!
//! ## Key concepts
//!
//! * **Population variance**: mean of squared deviations, divisor `n`
//!   (not `n - 1`). Values are treated as the full population of cells.
//!
//! ## Invariants
//!
//! * Inputs are finite; NaN handling is not defined here.
//! * Results do not depend on input order (up to floating-point summation order).
//!
//! ## Non-goals
//!
//! * This module does not provide weighted or streaming variants.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{QrStatsError, Result};

// ============================================================================
// Basic Statistics
// ============================================================================

/// Largest value.
pub fn max<T: Float>(values: &[T]) -> Result<T> {
    let (&first, rest) = values.split_first().ok_or(QrStatsError::EmptyInput)?;
    Ok(rest.iter().copied().fold(first, T::max))
}

/// Smallest value.
pub fn min<T: Float>(values: &[T]) -> Result<T> {
    let (&first, rest) = values.split_first().ok_or(QrStatsError::EmptyInput)?;
    Ok(rest.iter().copied().fold(first, T::min))
}

/// Left-to-right sum. Zero for an empty input.
#[inline]
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Arithmetic mean. Zero for an empty input.
pub fn average<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    sum(values) / count_as(values.len())
}

// ============================================================================
// Advanced Statistics
// ============================================================================

/// Median of the values.
///
/// Sorts a copy ascending; for an even count returns the mean of the two
/// middle elements, for an odd count the middle element itself.
pub fn median<T: Float>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(QrStatsError::EmptyInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / count_as(2))
    } else {
        Ok(sorted[mid])
    }
}

/// Population variance around the supplied `mean`.
///
/// # Formula
///
/// ```text
/// variance = sum((v_i - mean)^2) / n
/// ```
///
/// Zero for an empty input.
pub fn variance<T: Float>(values: &[T], mean: T) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let squared = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    });
    squared / count_as(values.len())
}

/// Square root of the population variance around `mean`.
#[inline]
pub fn standard_deviation<T: Float>(values: &[T], mean: T) -> T {
    variance(values, mean).sqrt()
}

/// Convert a count into the float type.
#[inline]
fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
