//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer computes descriptive statistics over the combined values of
//! the matrices in a request.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Analysis
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistics engine and report types.
pub mod statistics;
