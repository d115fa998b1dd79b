// ============================================================================
// Numeric Errors
// Error types for operator evaluation and answer formatting
// ============================================================================

use crate::domain::Arity;
use std::fmt;

/// Errors that can occur while evaluating an operator or normalizing its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Division or remainder by a zero divisor
    DivisionByZero,
    /// Argument outside the operator's mathematical domain
    Domain {
        operation: &'static str,
        reason: &'static str,
    },
    /// Operator called with an unsupported number of arguments
    InvalidArgumentCount {
        operation: &'static str,
        expected: Arity,
        found: usize,
    },
    /// Result does not fit the integer or floating-point range
    Overflow,
    /// Value is NaN or infinite and has no canonical rendering
    NonFinite,
    /// Input string could not be parsed as a number
    InvalidInput,
    /// Operator name is not part of the catalogue
    UnknownOperation,
}

impl NumericError {
    pub(crate) const fn domain(operation: &'static str, reason: &'static str) -> Self {
        NumericError::Domain { operation, reason }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Domain { operation, reason } => {
                write!(f, "math domain error in {}: {}", operation, reason)
            },
            NumericError::InvalidArgumentCount {
                operation,
                expected,
                found,
            } => write!(
                f,
                "invalid number of arguments passed to {}: expected {}, found {}",
                operation, expected, found
            ),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result out of representable range")
            },
            NumericError::NonFinite => write!(f, "result is not a finite number"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::UnknownOperation => write!(f, "unknown operation"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
