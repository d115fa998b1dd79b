// ============================================================================
// Normalizer
// Raw result -> rounded value -> text -> trimmed canonical answer string
// ============================================================================

use super::rounding::round_adaptive;
use super::scientific::scientific_to_decimal;
use crate::domain::NormalizerConfig;
use crate::numeric::{Number, NumericResult};

/// Decimal exponents rendered positionally by [`shortest_repr`]; the rest stay scientific.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Renders raw results as canonical answer strings.
///
/// A canonical string has no exponent marker, no trailing zero after a decimal point,
/// and no dangling decimal point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the given precision policy.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// The active precision policy
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a raw result.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN or infinite values.
    pub fn normalize(&self, value: Number) -> NumericResult<String> {
        let rounded = round_adaptive(value, &self.config)?;

        let rendered = match rounded {
            Number::Integer(i) => i.to_string(),
            Number::Real(x) => shortest_repr(x)?,
        };
        let trimmed = trim_fraction(&rendered);

        let canonical = if trimmed.contains(['e', 'E']) {
            scientific_to_decimal(&trimmed)?
        } else {
            trimmed
        };

        tracing::trace!(
            raw = %value,
            rounded = %rounded,
            rendered = %rendered,
            canonical = %canonical,
            "normalized result"
        );
        Ok(canonical)
    }
}

/// Normalize a raw result with the default precision policy.
///
/// # Example
/// ```
/// use funcqa_math::format::normalize;
///
/// assert_eq!(normalize(3.14159).unwrap(), "3.14");
/// assert_eq!(normalize(5.00).unwrap(), "5");
/// assert_eq!(normalize(0.00000233).unwrap(), "0.0000023");
/// ```
pub fn normalize(value: impl Into<Number>) -> NumericResult<String> {
    Normalizer::default().normalize(value.into())
}

/// Normalize with an explicit precision policy.
pub fn normalize_with(value: impl Into<Number>, config: &NormalizerConfig) -> NumericResult<String> {
    Normalizer::new(*config).normalize(value.into())
}

/// Shortest text that reads back as exactly `x`.
///
/// Decimal exponents in `[-4, 16)` render positionally with at least one fractional
/// digit (`5.0`, `0.00012`); others render in scientific form (`1.5e+20`, `1e-05`).
pub fn shortest_repr(x: f64) -> NumericResult<String> {
    let sci = shortest_scientific(x);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !POSITIONAL_EXPONENTS.contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return Ok(format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs()));
    }

    let mut positional = scientific_to_decimal(&sci)?;
    if !positional.contains('.') {
        positional.push_str(".0");
    }
    Ok(positional)
}

/// Shortest round-trip digits in `{:e}` form, e.g. "1.5e20" or "-2.3e-6".
///
/// When two candidates of that length are equally near `x`, the even one wins.
fn shortest_scientific(x: f64) -> String {
    let sci = format!("{:e}", x);
    let mantissa = sci.split_once('e').map_or(sci.as_str(), |(m, _)| m);
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count();

    // Exact-precision formatting rounds ties to even; `{:e}` rounds them up
    let even = format!("{:.*e}", digits.saturating_sub(1), x);
    match even.parse::<f64>() {
        Ok(value) if value == x => even,
        _ => sci,
    }
}

/// Strip trailing zeros and then a dangling point from the mantissa of `s`.
fn trim_fraction(s: &str) -> String {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => s.split_at(pos),
        None => (s, ""),
    };
    if !mantissa.contains('.') {
        return s.to_string();
    }

    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MagnitudeTest;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_reference_examples() {
        assert_eq!(normalize(3.14159).unwrap(), "3.14");
        assert_eq!(normalize(5.00).unwrap(), "5");
        assert_eq!(normalize(52.3523).unwrap(), "52.35");
        assert_eq!(normalize(52.0011).unwrap(), "52");
        assert_eq!(normalize(0.00000233).unwrap(), "0.0000023");
    }

    #[test]
    fn test_normalize_keeps_two_digits_past_leading_zeros() {
        // Three leading zeros -> five places
        assert_eq!(normalize(1.23e-4).unwrap(), "0.00012");
        assert_eq!(normalize(0.0456789).unwrap(), "0.046");
        assert_eq!(normalize(4.1234e-11).unwrap(), "0.000000000041");
    }

    #[test]
    fn test_normalize_integers() {
        assert_eq!(normalize(6).unwrap(), "6");
        assert_eq!(normalize(-42).unwrap(), "-42");
        assert_eq!(
            normalize(Number::Integer(100_000_000_000_000_000_000_000_000_000)).unwrap(),
            "100000000000000000000000000000"
        );
    }

    #[test]
    fn test_normalize_large_reals() {
        assert_eq!(normalize(1.5e20).unwrap(), "150000000000000000000");
        assert_eq!(normalize(-2.5e16).unwrap(), "-25000000000000000");
        assert_eq!(normalize(1e16).unwrap(), "10000000000000000");
        assert_eq!(normalize(123456789.987).unwrap(), "123456789.99");
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(normalize(0.0).unwrap(), "0");
        assert_eq!(normalize(0).unwrap(), "0");
        assert_eq!(normalize(1e-15).unwrap(), "0");
    }

    #[test]
    fn test_normalize_small_negative_textual() {
        assert_eq!(normalize(-0.00000233).unwrap(), "-0");
        assert_eq!(normalize(-0.5).unwrap(), "-0.5");
        assert_eq!(normalize(-0.001).unwrap(), "-0");
    }

    #[test]
    fn test_normalize_small_negative_absolute() {
        let config = NormalizerConfig::default().with_magnitude_test(MagnitudeTest::Absolute);
        assert_eq!(normalize_with(-0.00000233, &config).unwrap(), "-0.0000023");
        assert_eq!(normalize_with(-0.001, &config).unwrap(), "-0.001");
    }

    #[test]
    fn test_normalize_custom_places() {
        let config = NormalizerConfig::default().with_decimal_places(4);
        assert_eq!(normalize_with(3.14159, &config).unwrap(), "3.1416");
        assert_eq!(normalize_with(2.5, &config).unwrap(), "2.5");
    }

    #[test]
    fn test_normalize_non_finite() {
        assert!(normalize(f64::NAN).is_err());
        assert!(normalize(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_shortest_repr() {
        assert_eq!(shortest_repr(5.0).unwrap(), "5.0");
        assert_eq!(shortest_repr(0.1).unwrap(), "0.1");
        assert_eq!(shortest_repr(0.00012).unwrap(), "0.00012");
        assert_eq!(shortest_repr(1e-5).unwrap(), "1e-05");
        assert_eq!(shortest_repr(1.5e20).unwrap(), "1.5e+20");
        assert_eq!(shortest_repr(-0.0).unwrap(), "-0.0");
        assert_eq!(shortest_repr(1e15).unwrap(), "1000000000000000.0");
        assert_eq!(shortest_repr(1e16).unwrap(), "1e+16");
    }

    #[test]
    fn test_shortest_repr_ties_to_even() {
        // Each stored value sits exactly between two shortest candidates
        assert_eq!(shortest_repr(743738093127411.25).unwrap(), "743738093127411.2");
        assert_eq!(shortest_repr(145035020447699.625).unwrap(), "145035020447699.62");
        assert_eq!(shortest_repr(-743738093127411.25).unwrap(), "-743738093127411.2");
    }

    #[test]
    fn test_normalize_large_ties_to_even() {
        assert_eq!(normalize(743738093127411.25).unwrap(), "743738093127411.2");
        assert_eq!(normalize(145035020447699.625).unwrap(), "145035020447699.62");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("5.0"), "5");
        assert_eq!(trim_fraction("3.140"), "3.14");
        assert_eq!(trim_fraction("100"), "100");
        assert_eq!(trim_fraction("1.50e+20"), "1.5e+20");
        assert_eq!(trim_fraction("1e+20"), "1e+20");
    }

    fn is_canonical(s: &str) -> bool {
        !s.contains(['e', 'E'])
            && !s.ends_with('.')
            && !(s.contains('.') && s.ends_with('0'))
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(v in -1.0e12f64..1.0e12f64) {
            let once = normalize(v).unwrap();
            let reparsed: f64 = once.parse().unwrap();
            prop_assert_eq!(normalize(reparsed).unwrap(), once);
        }

        #[test]
        fn prop_small_magnitudes_are_idempotent(v in 1.0e-12f64..1.0f64) {
            let once = normalize(v).unwrap();
            let reparsed: f64 = once.parse().unwrap();
            prop_assert_eq!(normalize(reparsed).unwrap(), once);
        }

        #[test]
        fn prop_output_is_canonical(v in proptest::num::f64::NORMAL) {
            let out = normalize(v).unwrap();
            prop_assert!(is_canonical(&out), "{} -> {}", v, out);
        }

        #[test]
        fn prop_output_within_precision(v in -1.0e6f64..1.0e6f64) {
            let out: f64 = normalize(v).unwrap().parse().unwrap();
            prop_assert!((out - v).abs() <= 0.005 + 1e-9, "{} -> {}", v, out);
        }
    }
}
