// ============================================================================
// FuncQA Math Library
// Arithmetic operators with canonical answer formatting for exact-match grading
// ============================================================================

//! # FuncQA Math
//!
//! Arithmetic and combinatorial operators whose results are rendered as canonical
//! strings, so a grader can compare answers by exact text equality.
//!
//! ## Features
//!
//! - **Closed operator catalogue** (add, divide, power, log, choose, gcd, ...)
//! - **Exact integers** with checked `i128` arithmetic, promoted to reals only when needed
//! - **Magnitude-adaptive rounding** that keeps two digits past a leading-zero run
//! - **Digit-exact scientific notation expansion** with no float reparsing
//!
//! ## Example
//!
//! ```rust
//! use funcqa_math::prelude::*;
//!
//! let calculator = Calculator::default();
//!
//! let args = [Number::from(12), Number::from(3), Number::from(2)];
//! assert_eq!(calculator.evaluate(Operation::Divide, &args).unwrap(), "2");
//!
//! // Harness tool names resolve too
//! let args = [Number::from(5), Number::from(2)];
//! assert_eq!(calculator.evaluate_named("choose_", &args).unwrap(), "10");
//!
//! assert_eq!(normalize(0.00000233).unwrap(), "0.0000023");
//! assert_eq!(scientific_to_decimal("5.67e+2").unwrap(), "567");
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Arity, MagnitudeTest, NormalizerConfig, Operation, OperationRequest,
    };
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::format::{normalize, normalize_with, scientific_to_decimal, Normalizer};
    pub use crate::numeric::{Number, NumericError, NumericResult};
}
