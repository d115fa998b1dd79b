// ============================================================================
// Numeric Module
// Tagged numbers and the error vocabulary shared by every operator
// ============================================================================
//
// This module provides:
// - Number: Integer/Real tagged value used for arguments and raw results
// - NumericError: Error types for evaluation and formatting
//
// Design principles:
// - Integer arithmetic is exact and checked
// - All arithmetic returns Result (no panics)
// - Promotion to Real happens only when a Real operand is involved

mod errors;
mod number;

pub use errors::{NumericError, NumericResult};
pub use number::Number;
