//! Floating-point tolerances for structural matrix checks.
//!
//! ## Purpose
//!
//! This module holds the fixed tolerances used by the property analyzer and
//! the comparison helpers built on them.
//!
//! ## Key concepts
//!
//! * **Structural tolerance** (`1e-10`): an entry is treated as zero when its
//!   magnitude is at most this value. Absorbs floating-point noise left by the
//!   factorization that produced the matrix; it is not an input-error margin.
//! * **Orthogonality tolerance** (`1e-6`): allowed deviation of each entry of
//!   `M * M^T` from the identity. Looser than the structural tolerance because
//!   every entry is an n-term dot product and rounding error accumulates.
//!
//! ## Non-goals
//!
//! * Tolerances are not caller-configurable.

/// Magnitude at or below which an entry counts as zero in diagonal and
/// triangular checks.
pub const STRUCTURAL_TOLERANCE: f64 = 1e-10;

/// Maximum per-entry deviation of `M * M^T` from the identity.
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-6;

/// Whether `value` is zero within [`STRUCTURAL_TOLERANCE`].
#[inline]
pub fn is_negligible(value: f64) -> bool {
    value.abs() <= STRUCTURAL_TOLERANCE
}

/// Whether `actual` is within `tolerance` of `expected`.
#[inline]
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}
