// ============================================================================
// Operation Library
// Raw-result implementations of every operator in the catalogue
// ============================================================================

use crate::domain::Operation;
use crate::format::normalize;
use crate::numeric::{Number, NumericError, NumericResult};

impl Operation {
    /// Compute the raw, unformatted result of this operator.
    ///
    /// # Errors
    /// `InvalidArgumentCount` when `args` violates [`Operation::arity`], plus the
    /// operator-specific failures documented on each function in this module.
    pub fn compute(self, args: &[Number]) -> NumericResult<Number> {
        match self {
            Operation::Add => add(args),
            Operation::Subtract => subtract(args),
            Operation::Multiply => multiply(args),
            Operation::Divide => divide(args),
            Operation::Power => power(args),
            Operation::Sqrt => sqrt(args),
            Operation::Log => log(args),
            Operation::Ln => ln(args),
            Operation::Choose => choose(args),
            Operation::Permute => permute(args),
            Operation::Gcd => gcd(args),
            Operation::Lcm => lcm(args),
            Operation::Remainder => remainder(args),
        }
    }

    /// Compute and normalize with the default precision policy.
    ///
    /// # Example
    /// ```
    /// use funcqa_math::prelude::*;
    ///
    /// let args = [Number::from(7), Number::from(2)];
    /// assert_eq!(Operation::Divide.evaluate(&args).unwrap(), "3.5");
    /// ```
    pub fn evaluate(self, args: &[Number]) -> NumericResult<String> {
        normalize(self.compute(args)?)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// First argument and the rest, after checking the operator's arity.
fn split_args<T>(op: Operation, args: &[T]) -> NumericResult<(&T, &[T])> {
    op.check_arity(args.len())?;
    args.split_first().ok_or(NumericError::InvalidArgumentCount {
        operation: op.name(),
        expected: op.arity(),
        found: 0,
    })
}

/// Left fold over `args` after checking the operator's arity.
fn fold<F>(op: Operation, args: &[Number], step: F) -> NumericResult<Number>
where
    F: Fn(Number, Number) -> NumericResult<Number>,
{
    let (first, rest) = split_args(op, args)?;
    rest.iter().try_fold(*first, |acc, &arg| step(acc, arg))
}

fn require_integer(op: Operation, value: Number) -> NumericResult<i128> {
    value
        .to_integer()
        .ok_or(NumericError::domain(op.name(), "arguments must be integers"))
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn integer_gcd(a: i128, b: i128) -> NumericResult<i128> {
    i128::try_from(gcd_u128(a.unsigned_abs(), b.unsigned_abs())).map_err(|_| NumericError::Overflow)
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Sum of all arguments.
pub fn add(args: &[Number]) -> NumericResult<Number> {
    Operation::Add.check_arity(args.len())?;
    // Summation starts from integer zero, so a lone -0.0 sums to 0.0
    args.iter()
        .try_fold(Number::ZERO, |acc, &arg| acc.checked_add(arg))
}

/// `args[0] - args[1] - ...`
pub fn subtract(args: &[Number]) -> NumericResult<Number> {
    fold(Operation::Subtract, args, Number::checked_sub)
}

/// Product of all arguments.
pub fn multiply(args: &[Number]) -> NumericResult<Number> {
    fold(Operation::Multiply, args, Number::checked_mul)
}

/// `args[0] / args[1] / ...`
///
/// # Errors
/// `DivisionByZero` if any divisor is zero, checked before dividing.
pub fn divide(args: &[Number]) -> NumericResult<Number> {
    if args.iter().skip(1).any(|d| d.is_zero()) {
        return Err(NumericError::DivisionByZero);
    }
    let quotient = fold(Operation::Divide, args, Number::checked_div)?;
    Ok(Number::Real(quotient.as_f64()))
}

/// Left-associative exponentiation: `[2, 3, 2]` is `(2^3)^2 = 64`.
///
/// # Errors
/// - `Overflow` if the result leaves the integer or double range
/// - `DivisionByZero` for zero raised to a negative power
/// - `Domain` for a negative base with a fractional exponent
pub fn power(args: &[Number]) -> NumericResult<Number> {
    fold(Operation::Power, args, checked_pow)
}

fn checked_pow(base: Number, exponent: Number) -> NumericResult<Number> {
    match (base, exponent) {
        (Number::Integer(b), Number::Integer(e)) if e >= 0 => integer_pow(b, e),
        _ => real_pow(base.as_f64(), exponent.as_f64()),
    }
}

fn integer_pow(base: i128, exponent: i128) -> NumericResult<Number> {
    let value = match base {
        0 => i128::from(exponent == 0),
        1 => 1,
        -1 if exponent % 2 == 0 => 1,
        -1 => -1,
        _ => {
            let exponent = u32::try_from(exponent).map_err(|_| NumericError::Overflow)?;
            base.checked_pow(exponent).ok_or(NumericError::Overflow)?
        },
    };
    Ok(Number::Integer(value))
}

fn real_pow(base: f64, exponent: f64) -> NumericResult<Number> {
    if base == 0.0 && exponent < 0.0 {
        return Err(NumericError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(NumericError::domain(
            "power",
            "negative base requires an integral exponent",
        ));
    }

    let value = base.powf(exponent);
    if value.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(NumericError::Overflow);
    }
    Ok(Number::Real(value))
}

// ============================================================================
// Roots and Logarithms
// ============================================================================

/// Square root.
///
/// # Errors
/// `Domain` if the argument is negative.
pub fn sqrt(args: &[Number]) -> NumericResult<Number> {
    Operation::Sqrt.check_arity(args.len())?;
    let x = args[0];
    if x.is_negative() {
        return Err(NumericError::domain("sqrt", "operand must be non-negative"));
    }
    Ok(Number::Real(x.as_f64().sqrt()))
}

/// `log10(args[0])`, or `log(args[0])` in base `args[1]`.
///
/// # Errors
/// - `InvalidArgumentCount` unless given one or two arguments
/// - `Domain` if the operand is not positive, or the base is not positive or equals 1
pub fn log(args: &[Number]) -> NumericResult<Number> {
    Operation::Log.check_arity(args.len())?;
    let x = args[0];
    if !x.is_positive() {
        return Err(NumericError::domain("log", "operand must be positive"));
    }

    let Some(&base) = args.get(1) else {
        return Ok(Number::Real(x.as_f64().log10()));
    };
    if !base.is_positive() {
        return Err(NumericError::domain("log", "base must be positive"));
    }
    if base.as_f64() == 1.0 {
        return Err(NumericError::domain("log", "base must not be 1"));
    }
    Ok(Number::Real(x.as_f64().ln() / base.as_f64().ln()))
}

/// Natural logarithm.
///
/// # Errors
/// `Domain` if the argument is not positive.
pub fn ln(args: &[Number]) -> NumericResult<Number> {
    Operation::Ln.check_arity(args.len())?;
    let x = args[0];
    if !x.is_positive() {
        return Err(NumericError::domain("ln", "operand must be positive"));
    }
    Ok(Number::Real(x.as_f64().ln()))
}

// ============================================================================
// Combinatorics
// ============================================================================

/// Validated `(n, r)` pair with `n >= r >= 0`.
fn selection(op: Operation, args: &[Number]) -> NumericResult<(i128, i128)> {
    op.check_arity(args.len())?;
    let n = require_integer(op, args[0])?;
    let r = require_integer(op, args[1])?;
    if r < 0 || n < r {
        return Err(NumericError::domain(op.name(), "requires n >= r >= 0"));
    }
    Ok((n, r))
}

/// Binomial coefficient C(n, r).
///
/// # Errors
/// `Domain` unless both arguments are integral with `n >= r >= 0`.
pub fn choose(args: &[Number]) -> NumericResult<Number> {
    let (n, r) = selection(Operation::Choose, args)?;
    let r = r.min(n - r);

    let mut acc: i128 = 1;
    for i in 0..r {
        // acc * (n - i) is divisible by (i + 1) at every step
        acc = acc.checked_mul(n - i).ok_or(NumericError::Overflow)? / (i + 1);
    }
    Ok(Number::Integer(acc))
}

/// Permutation count P(n, r) = n! / (n - r)!.
///
/// # Errors
/// `Domain` unless both arguments are integral with `n >= r >= 0`.
pub fn permute(args: &[Number]) -> NumericResult<Number> {
    let (n, r) = selection(Operation::Permute, args)?;
    // n - r + 1 overflows for r = 0 at i128::MAX, so step over n - r..n instead
    (n - r..n)
        .try_fold(1_i128, |acc, k| acc.checked_mul(k + 1))
        .map(Number::Integer)
        .ok_or(NumericError::Overflow)
}

// ============================================================================
// Number Theory
// ============================================================================

/// Greatest common divisor folded over the arguments.
///
/// A single argument is returned unchanged.
///
/// # Errors
/// `Domain` if any argument is not integral.
pub fn gcd(args: &[Number]) -> NumericResult<Number> {
    let values = integers(Operation::Gcd, args)?;
    let (&first, rest) = split_args(Operation::Gcd, &values)?;
    rest.iter()
        .try_fold(first, |acc, &arg| integer_gcd(acc, arg))
        .map(Number::Integer)
}

/// Least common multiple folded as `res * arg / gcd(res, arg)`.
///
/// # Errors
/// - `Domain` if any argument is not integral
/// - `DivisionByZero` if an intermediate gcd is zero (two zero operands)
pub fn lcm(args: &[Number]) -> NumericResult<Number> {
    let values = integers(Operation::Lcm, args)?;
    let (&first, rest) = split_args(Operation::Lcm, &values)?;
    rest.iter()
        .try_fold(first, |acc, &arg| {
            let divisor = integer_gcd(acc, arg)?;
            if divisor == 0 {
                return Err(NumericError::DivisionByZero);
            }
            let product = acc.checked_mul(arg).ok_or(NumericError::Overflow)?;
            Ok(product / divisor)
        })
        .map(Number::Integer)
}

fn integers(op: Operation, args: &[Number]) -> NumericResult<Vec<i128>> {
    args.iter().map(|&arg| require_integer(op, arg)).collect()
}

/// Floored remainder: the result takes the sign of the divisor.
///
/// # Errors
/// `DivisionByZero` if the divisor is zero.
pub fn remainder(args: &[Number]) -> NumericResult<Number> {
    Operation::Remainder.check_arity(args.len())?;
    args[0].floored_rem(args[1])
}
