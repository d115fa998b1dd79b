// ============================================================================
// Format Module
// Canonical answer rendering for exact-match grading
// ============================================================================
//
// Pipeline:
// 1. rounding    - pick decimal places from the value's magnitude, round half-even
// 2. normalizer  - render shortest digits, trim zeros and dangling points
// 3. scientific  - rewrite any remaining exponent form positionally
//
// The scientific converter moves digits textually and never goes back through
// binary floating point.

mod normalizer;
mod rounding;
mod scientific;

pub use normalizer::{normalize, normalize_with, shortest_repr, Normalizer};
pub use rounding::{adaptive_decimal_places, round_adaptive, round_half_even, PROBE_DIGITS};
pub use scientific::{scientific_to_decimal, MAX_EXPONENT};
