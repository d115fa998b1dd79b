// ============================================================================
// Engine Module
// Operator implementations and the calculator that formats their results
// ============================================================================

mod calculator;

pub mod factory;
pub mod operations;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
