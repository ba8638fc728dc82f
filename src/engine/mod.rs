//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer gates input and orchestrates the lower layers:
//! - Strict validation of matrices, Q/R pairs and configuration
//! - Assembly of analysis and full reports
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Analysis
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// Report orchestration.
pub mod report;
