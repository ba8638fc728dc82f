//! Layer 3: Analysis
//!
//! # Purpose
//!
//! This layer derives structural facts about individual matrices
//! (shape, square, diagonal, upper-triangular, orthogonal).
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
//! Layer 3: Analysis ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Structural property checks.
pub mod properties;
