// ============================================================================
// Operation Catalogue
// Closed set of operators a harness can request, with their arity rules
// ============================================================================

use crate::numeric::{Number, NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Arity
// ============================================================================

/// Accepted argument counts for an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly `n` arguments
    Exactly(usize),
    /// `n` or more arguments
    AtLeast(usize),
    /// Between `min` and `max` arguments, inclusive
    Between(usize, usize),
}

impl Arity {
    /// Check whether `count` arguments satisfy this arity.
    #[inline]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Between(min, max) => count >= min && count <= max,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Between(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

// ============================================================================
// Operation
// ============================================================================

/// Arithmetic and combinatorial operators available to the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sum of all arguments
    Add,
    /// `a0 - a1 - a2 - ...`
    Subtract,
    /// Product of all arguments
    Multiply,
    /// `a0 / a1 / a2 / ...`, always a real quotient
    Divide,
    /// Left-associative `((a0 ^ a1) ^ a2) ^ ...`
    Power,
    /// Non-negative square root
    Sqrt,
    /// Base-10 logarithm, or logarithm of `a0` in base `a1`
    Log,
    /// Natural logarithm
    Ln,
    /// Binomial coefficient C(n, r)
    Choose,
    /// Permutation count P(n, r)
    Permute,
    /// Greatest common divisor
    Gcd,
    /// Least common multiple
    Lcm,
    /// Floored remainder `a0 mod a1`
    Remainder,
}

impl Operation {
    /// Every operator, in catalogue order
    pub const ALL: [Operation; 13] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Log,
        Operation::Ln,
        Operation::Choose,
        Operation::Permute,
        Operation::Gcd,
        Operation::Lcm,
        Operation::Remainder,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Log => "log",
            Operation::Ln => "ln",
            Operation::Choose => "choose",
            Operation::Permute => "permute",
            Operation::Gcd => "gcd",
            Operation::Lcm => "lcm",
            Operation::Remainder => "remainder",
        }
    }

    /// Accepted argument counts
    pub const fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power
            | Operation::Gcd
            | Operation::Lcm => Arity::AtLeast(1),
            Operation::Sqrt | Operation::Ln => Arity::Exactly(1),
            Operation::Log => Arity::Between(1, 2),
            Operation::Choose | Operation::Permute | Operation::Remainder => Arity::Exactly(2),
        }
    }

    /// Fail with `InvalidArgumentCount` unless `count` satisfies [`Operation::arity`].
    pub fn check_arity(self, count: usize) -> NumericResult<()> {
        let expected = self.arity();
        if expected.accepts(count) {
            Ok(())
        } else {
            Err(NumericError::InvalidArgumentCount {
                operation: self.name(),
                expected,
                found: count,
            })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = NumericError;

    /// Resolve an operator name.
    ///
    /// Matching ignores ASCII case, surrounding whitespace and one trailing
    /// underscore, so the reference tool names (`add_`, `permutate_`) resolve too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix('_').unwrap_or(name).to_ascii_lowercase();

        let op = match name.as_str() {
            "add" => Operation::Add,
            "subtract" => Operation::Subtract,
            "multiply" => Operation::Multiply,
            "divide" => Operation::Divide,
            "power" => Operation::Power,
            "sqrt" => Operation::Sqrt,
            "log" => Operation::Log,
            "ln" => Operation::Ln,
            "choose" => Operation::Choose,
            "permute" | "permutate" => Operation::Permute,
            "gcd" => Operation::Gcd,
            "lcm" => Operation::Lcm,
            "remainder" => Operation::Remainder,
            _ => return Err(NumericError::UnknownOperation),
        };
        Ok(op)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Operation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Operation Request
// ============================================================================

/// One question posed by the harness: an operator and its ordered arguments
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationRequest {
    pub operation: Operation,
    pub args: Vec<Number>,
}

impl OperationRequest {
    /// Create a new request
    pub fn new<I, N>(operation: Operation, args: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        Self {
            operation,
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}
