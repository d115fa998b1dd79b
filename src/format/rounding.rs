// ============================================================================
// Rounding Engine
// Magnitude-adaptive precision selection and round-half-even rounding
// ============================================================================

use crate::domain::config::{MagnitudeTest, NormalizerConfig, MAX_DECIMAL_PLACES};
use crate::numeric::{Number, NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits used when inspecting a value's magnitude
pub const PROBE_DIGITS: usize = 10;

/// Every double at or above 2^53 is an integer; rounding to places >= 0 is a no-op.
const INTEGRAL_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Decide how many decimal places to keep for `x`.
///
/// `x` is rendered with [`PROBE_DIGITS`] fractional digits. When the integer part
/// reads `"0"` and the fraction starts with zeros, the result keeps exactly two digits
/// past that leading-zero run, even when that is fewer than `decimal_places`.
/// Otherwise the result is `decimal_places`.
///
/// # Example
/// ```
/// use funcqa_math::domain::MagnitudeTest;
/// use funcqa_math::format::adaptive_decimal_places;
///
/// assert_eq!(adaptive_decimal_places(52.3523, 2, MagnitudeTest::Textual), 2);
/// assert_eq!(adaptive_decimal_places(0.00000233, 2, MagnitudeTest::Textual), 7);
/// ```
pub fn adaptive_decimal_places(x: f64, decimal_places: u32, test: MagnitudeTest) -> u32 {
    let subject = match test {
        MagnitudeTest::Textual => x,
        MagnitudeTest::Absolute => x.abs(),
    };
    if !subject.is_finite() || subject.abs() >= 1.0 {
        return decimal_places;
    }

    let rendered = format!("{:.*}", PROBE_DIGITS, subject);
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let leading_zeros = fraction.len() - fraction.trim_start_matches('0').len();

    if integer == "0" && leading_zeros >= 1 {
        leading_zeros as u32 + 2
    } else {
        decimal_places
    }
}

/// Round `x` to `places` decimal places, ties to even, on its exact binary value.
///
/// A negative input that rounds to zero keeps its sign (`-0.0`).
///
/// # Errors
/// Returns `NonFinite` for NaN or infinite input.
pub fn round_half_even(x: f64, places: u32) -> NumericResult<f64> {
    if !x.is_finite() {
        return Err(NumericError::NonFinite);
    }
    if x.abs() >= INTEGRAL_MAGNITUDE {
        return Ok(x);
    }

    let exact = match Decimal::from_f64_retain(x) {
        Some(d) => d,
        // Only subnormal-scale values fall outside Decimal's range here
        None if x.abs() < 1.0 => return Ok(0.0_f64.copysign(x)),
        None => return Err(NumericError::Overflow),
    };
    let rounded = exact.round_dp_with_strategy(
        places.min(MAX_DECIMAL_PLACES),
        RoundingStrategy::MidpointNearestEven,
    );

    // Decimal text parses to the correctly rounded double
    let value: f64 = rounded
        .to_string()
        .parse()
        .map_err(|_| NumericError::InvalidInput)?;

    Ok(if value == 0.0 {
        0.0_f64.copysign(x)
    } else {
        value
    })
}

/// Apply the precision policy of `config` to a raw result.
///
/// Integers pass through unchanged; reals are rounded to
/// [`adaptive_decimal_places`].
pub fn round_adaptive(value: Number, config: &NormalizerConfig) -> NumericResult<Number> {
    match value {
        Number::Integer(_) => Ok(value),
        Number::Real(x) => {
            let places = adaptive_decimal_places(x, config.decimal_places, config.magnitude_test);
            round_half_even(x, places).map(Number::Real)
        },
    }
}
