// ============================================================================
// Number
// Tagged numeric value shared by operator arguments and raw results
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// A signed real number tagged with its arithmetic kind.
///
/// `Integer` values use exact checked arithmetic. `Real` values follow IEEE 754
/// double semantics. Mixing the two promotes to `Real`, so an expression stays
/// integral only while every operand is integral.
///
/// # Example
/// ```
/// use funcqa_math::numeric::Number;
///
/// let sum = Number::from(2).checked_add(Number::from(3)).unwrap();
/// assert_eq!(sum, Number::Integer(5));
///
/// let mixed = Number::from(2).checked_add(Number::from(0.5)).unwrap();
/// assert_eq!(mixed, Number::Real(2.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Exact integer
    Integer(i128),
    /// Binary floating-point value
    Real(f64),
}

/// Largest magnitude below which every integer is exactly representable as `f64`.
const F64_EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

impl Number {
    /// Zero as an integer
    pub const ZERO: Self = Number::Integer(0);

    /// One as an integer
    pub const ONE: Self = Number::Integer(1);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Value as a double. Integers beyond 2^53 are rounded to the nearest double.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Real(x) => x,
        }
    }

    /// Exact integer value, if the number is integral.
    ///
    /// A `Real` qualifies when it is finite, has no fractional part and lies in the
    /// range where doubles still represent every integer.
    pub fn to_integer(self) -> Option<i128> {
        match self {
            Number::Integer(i) => Some(i),
            Number::Real(x) if x.is_finite() && x.fract() == 0.0 && x.abs() <= F64_EXACT_INTEGER_LIMIT => {
                Some(x as i128)
            },
            Number::Real(_) => None,
        }
    }

    /// True for the `Integer` tag.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Check if value is zero (either sign for reals).
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Real(x) => x == 0.0,
        }
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Number::Integer(i) => i < 0,
            Number::Real(x) => x < 0.0,
        }
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        match self {
            Number::Integer(i) => i > 0,
            Number::Real(x) => x > 0.0,
        }
    }

    /// Check if value is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Real(x) => x.is_finite(),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if an integer sum leaves the `i128` range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_add(b)
                .map(Number::Integer)
                .ok_or(NumericError::Overflow),
            (a, b) => Ok(Number::Real(a.as_f64() + b.as_f64())),
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if an integer difference leaves the `i128` range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_sub(b)
                .map(Number::Integer)
                .ok_or(NumericError::Overflow),
            (a, b) => Ok(Number::Real(a.as_f64() - b.as_f64())),
        }
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if an integer product leaves the `i128` range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a
                .checked_mul(b)
                .map(Number::Integer)
                .ok_or(NumericError::Overflow),
            (a, b) => Ok(Number::Real(a.as_f64() * b.as_f64())),
        }
    }

    /// True division. The quotient is always `Real`, even for two integers.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Number::Real(self.as_f64() / rhs.as_f64()))
    }

    /// Floored remainder: a non-zero result takes the sign of the divisor.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn floored_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => {
                // i128::MIN % -1 is the only overflowing case; its remainder is 0
                let mut r = a.checked_rem(b).unwrap_or(0);
                if r != 0 && (r < 0) != (b < 0) {
                    r += b;
                }
                Ok(Number::Integer(r))
            },
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                let mut r = a % b;
                if r != 0.0 {
                    if (b < 0.0) != (r < 0.0) {
                        r += b;
                    }
                } else {
                    r = 0.0_f64.copysign(b);
                }
                Ok(Number::Real(r))
            },
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Number::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Real(f64::from(value))
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Real(x) => write!(f, "{}", x),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Number {
    type Err = NumericError;

    /// Parse an integer, decimal, or scientific-notation literal.
    ///
    /// # Examples
    /// - "42" -> Integer(42)
    /// - "-3.5" -> Real(-3.5)
    /// - "1.23e-4" -> Real(0.000123)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let is_real = s.contains(['.', 'e', 'E']);
        if !is_real {
            return s
                .parse::<i128>()
                .map(Number::Integer)
                .map_err(|_| NumericError::InvalidInput);
        }

        // Rust also accepts "inf" and "NaN"; those are not numerals
        if !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
            return Err(NumericError::InvalidInput);
        }

        let x: f64 = s.parse().map_err(|_| NumericError::InvalidInput)?;
        if !x.is_finite() {
            return Err(NumericError::Overflow);
        }
        Ok(Number::Real(x))
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Number;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                Number::Integer(i) => match i64::try_from(i) {
                    Ok(small) => serializer.serialize_i64(small),
                    Err(_) => serializer.serialize_i128(i),
                },
                Number::Real(x) => serializer.serialize_f64(x),
            }
        }
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = Number;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer, a float, or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
            Ok(Number::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
            Ok(Number::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Number, E> {
            Ok(Number::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
            Ok(Number::Real(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Number, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Number {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(NumberVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Number::ZERO, Number::Integer(0));
        assert_eq!(Number::ONE, Number::Integer(1));
        assert_eq!(Number::default(), Number::ZERO);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Number::from(7_i32), Number::Integer(7));
        assert_eq!(Number::from(7_u64), Number::Integer(7));
        assert_eq!(Number::from(2.5_f64), Number::Real(2.5));
        assert_eq!(Number::from(0.5_f32), Number::Real(0.5));
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(Number::Integer(-4).to_integer(), Some(-4));
        assert_eq!(Number::Real(5.0).to_integer(), Some(5));
        assert_eq!(Number::Real(5.5).to_integer(), None);
        assert_eq!(Number::Real(f64::NAN).to_integer(), None);
        assert_eq!(Number::Real(1e300).to_integer(), None);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Real(-0.0).is_zero());
        assert!(Number::Integer(-1).is_negative());
        assert!(Number::Real(0.1).is_positive());
        assert!(!Number::Real(-0.0).is_negative());
    }

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        let a = Number::from(10);
        let b = Number::from(3);
        assert_eq!(a.checked_add(b).unwrap(), Number::Integer(13));
        assert_eq!(a.checked_sub(b).unwrap(), Number::Integer(7));
        assert_eq!(a.checked_mul(b).unwrap(), Number::Integer(30));
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        let a = Number::from(1);
        let b = Number::from(0.5);
        assert_eq!(a.checked_add(b).unwrap(), Number::Real(1.5));
        assert_eq!(a.checked_sub(b).unwrap(), Number::Real(0.5));
        assert_eq!(b.checked_mul(a).unwrap(), Number::Real(0.5));
    }

    #[test]
    fn test_integer_overflow() {
        let max = Number::Integer(i128::MAX);
        assert_eq!(max.checked_add(Number::ONE), Err(NumericError::Overflow));
        assert_eq!(max.checked_mul(Number::from(2)), Err(NumericError::Overflow));
        assert_eq!(
            Number::Integer(i128::MIN).checked_sub(Number::ONE),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_division_is_real() {
        let q = Number::from(7).checked_div(Number::from(2)).unwrap();
        assert_eq!(q, Number::Real(3.5));
        let exact = Number::from(6).checked_div(Number::from(3)).unwrap();
        assert_eq!(exact, Number::Real(2.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Number::from(1).checked_div(Number::ZERO),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            Number::from(1.5).checked_div(Number::Real(-0.0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_floored_rem_integers() {
        assert_eq!(Number::from(17).floored_rem(Number::from(5)).unwrap(), Number::Integer(2));
        assert_eq!(Number::from(-7).floored_rem(Number::from(3)).unwrap(), Number::Integer(2));
        assert_eq!(Number::from(7).floored_rem(Number::from(-3)).unwrap(), Number::Integer(-2));
        assert_eq!(Number::from(8).floored_rem(Number::from(4)).unwrap(), Number::Integer(0));
        assert_eq!(
            Number::Integer(i128::MIN).floored_rem(Number::from(-1)).unwrap(),
            Number::Integer(0)
        );
    }

    #[test]
    fn test_floored_rem_reals() {
        assert_eq!(Number::from(5.5).floored_rem(Number::from(2)).unwrap(), Number::Real(1.5));
        assert_eq!(Number::from(-5.5).floored_rem(Number::from(2)).unwrap(), Number::Real(0.5));
        let zero = Number::from(4.0).floored_rem(Number::from(-2.0)).unwrap();
        assert!(matches!(zero, Number::Real(z) if z == 0.0 && z.is_sign_negative()));
    }

    #[test]
    fn test_rem_by_zero() {
        assert_eq!(
            Number::from(3).floored_rem(Number::ZERO),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Integer(42));
        assert_eq!(" -3.5 ".parse::<Number>().unwrap(), Number::Real(-3.5));
        assert_eq!("1.23e-4".parse::<Number>().unwrap(), Number::Real(1.23e-4));
        assert_eq!("5E2".parse::<Number>().unwrap(), Number::Real(500.0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("".parse::<Number>(), Err(NumericError::InvalidInput));
        assert_eq!("abc".parse::<Number>(), Err(NumericError::InvalidInput));
        assert_eq!("inf".parse::<Number>(), Err(NumericError::InvalidInput));
        assert_eq!("1.2.3".parse::<Number>(), Err(NumericError::InvalidInput));
        assert_eq!("1e999".parse::<Number>(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Integer(-12).to_string(), "-12");
        assert_eq!(Number::Real(2.5).to_string(), "2.5");
    }
}
