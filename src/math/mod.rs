//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric building blocks:
//! - Fixed tolerances for structural checks
//! - Descriptive statistics (extrema, mean, median, population variance)
//!
//! These are reusable functions with no knowledge of matrices or QR pairs.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Analysis
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Floating-point tolerances.
pub mod tolerance;

/// Descriptive statistics.
pub mod descriptive;
