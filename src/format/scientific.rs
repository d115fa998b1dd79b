// ============================================================================
// Scientific Notation Converter
// Digit-exact rewriting of `<coefficient>e<exponent>` into positional form
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

/// Exponents beyond this magnitude are rejected instead of padded.
///
/// Doubles never exceed |e| = 324, so this only guards against hostile input.
pub const MAX_EXPONENT: i64 = 4096;

/// Convert a scientific-notation numeral into an equivalent plain-decimal string.
///
/// The decimal point is moved by pure digit-position arithmetic; the input is never
/// reparsed as a binary float, so every digit of the coefficient survives. Trailing
/// zeros after the point, a dangling point and redundant leading zeros are removed.
///
/// Input without an exponent marker is treated as exponent 0.
///
/// # Errors
/// - `InvalidInput` if the string is not a well-formed numeral
/// - `Overflow` if the exponent magnitude exceeds [`MAX_EXPONENT`]
///
/// # Example
/// ```
/// use funcqa_math::format::scientific_to_decimal;
///
/// assert_eq!(scientific_to_decimal("1.23e-4").unwrap(), "0.000123");
/// assert_eq!(scientific_to_decimal("5.67e+2").unwrap(), "567");
/// ```
pub fn scientific_to_decimal(sci: &str) -> NumericResult<String> {
    let (coefficient, exponent) = split_exponent(sci.trim())?;
    let (negative, coefficient) = match coefficient.as_bytes().first() {
        Some(b'-') => (true, &coefficient[1..]),
        Some(b'+') => (false, &coefficient[1..]),
        _ => (false, coefficient),
    };
    validate_coefficient(coefficient)?;

    let shifted = shift_decimal_point(coefficient, exponent);
    let canonical = strip_redundant_zeros(&shifted);

    Ok(if negative {
        format!("-{}", canonical)
    } else {
        canonical
    })
}

/// Split a numeral on its exponent marker. A missing exponent counts as 0.
fn split_exponent(s: &str) -> NumericResult<(&str, i64)> {
    let Some(pos) = s.find(['e', 'E']) else {
        return Ok((s, 0));
    };

    let (coefficient, exponent) = (&s[..pos], &s[pos + 1..]);
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidInput);
    }

    let exponent: i64 = exponent.parse().map_err(|_| NumericError::Overflow)?;
    if exponent.abs() > MAX_EXPONENT {
        return Err(NumericError::Overflow);
    }
    Ok((coefficient, exponent))
}

/// Unsigned coefficient: digits with at most one decimal point, at least one digit.
fn validate_coefficient(coefficient: &str) -> NumericResult<()> {
    let mut seen_point = false;
    let mut seen_digit = false;
    for b in coefficient.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => return Err(NumericError::InvalidInput),
        }
    }
    if seen_digit {
        Ok(())
    } else {
        Err(NumericError::InvalidInput)
    }
}

/// Move the decimal point of an unsigned coefficient `exponent` places to the right.
fn shift_decimal_point(coefficient: &str, exponent: i64) -> String {
    if exponent == 0 {
        return coefficient.to_string();
    }

    let point = coefficient.find('.').unwrap_or(coefficient.len());
    let mut digits: String = coefficient.chars().filter(|&c| c != '.').collect();
    let new_index = point as i64 + exponent;

    if new_index <= 0 {
        // Point lands left of every digit
        let mut out = String::with_capacity(digits.len() + 2 + (-new_index) as usize);
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-new_index) as usize));
        out.push_str(&digits);
        return out;
    }

    let new_index = new_index as usize;
    if digits.len() < new_index {
        let padding = new_index - digits.len();
        digits.extend(std::iter::repeat_n('0', padding));
    }
    if new_index < digits.len() {
        digits.insert(new_index, '.');
    }
    digits
}

/// Drop trailing fractional zeros, a dangling point, and leading integer zeros.
fn strip_redundant_zeros(s: &str) -> String {
    let (integer, fraction) = match s.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (s, ""),
    };

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

// ============================================================================
// Tests
// ============================================================================
