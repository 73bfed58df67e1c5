//! Decimal parsing, normalization and rounded division
//!
//! All values are `BigDecimal`; nothing here goes through floating point.
//! Display text always uses plain notation, never exponents.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::core::{CalcError, CalcResult};

/// Number of fractional digits kept by division
pub const DIVISION_SCALE: i64 = 12;

/// Parses entry text such as `"12"`, `"-0.5"` or `"3."`.
///
/// A single trailing decimal point is accepted because it is a normal
/// intermediate state while typing.
pub fn parse_entry(text: &str) -> CalcResult<BigDecimal> {
    let malformed = || CalcError::MalformedNumber(text.to_string());

    let body = text.strip_suffix('.').unwrap_or(text);
    let unsigned = body.strip_prefix('-').unwrap_or(body);
    let mut parts = unsigned.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
        return Err(malformed());
    }

    BigDecimal::from_str(body).map_err(|_| malformed())
}

/// Strips trailing zeros, so `1.500` becomes `1.5` and `0.000` becomes `0`
#[must_use]
pub fn normalize(value: &BigDecimal) -> BigDecimal {
    value.normalized()
}

/// Renders a value without exponent notation, keeping its scale as-is
#[must_use]
pub fn to_plain_string(value: &BigDecimal) -> String {
    value.to_plain_string()
}

/// Canonical display form: normalized, plain notation
#[must_use]
pub fn display_string(value: &BigDecimal) -> String {
    to_plain_string(&normalize(value))
}

/// Exact division by one hundred
pub fn percent(value: &BigDecimal) -> CalcResult<BigDecimal> {
    let (digits, scale) = value.as_bigint_and_exponent();
    let shifted = scale
        .checked_add(2)
        .ok_or(CalcError::ScaleOutOfRange(scale))?;
    Ok(BigDecimal::new(digits, shifted))
}

/// Divides to [`DIVISION_SCALE`] fractional digits, rounding half away from zero.
///
/// The quotient is truncated one digit past the target scale and then
/// rounded once, so the result never depends on an intermediate rounding.
pub fn divide(dividend: &BigDecimal, divisor: &BigDecimal) -> CalcResult<BigDecimal> {
    if divisor.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    let guard_scale = DIVISION_SCALE + 1;
    let (numerator, numerator_scale) = dividend.as_bigint_and_exponent();
    let (denominator, denominator_scale) = divisor.as_bigint_and_exponent();

    // n*10^-a / (d*10^-b) * 10^13 == n * 10^(b - a + 13) / d
    let shift = denominator_scale
        .checked_sub(numerator_scale)
        .and_then(|s| s.checked_add(guard_scale))
        .ok_or(CalcError::ScaleOutOfRange(numerator_scale))?;

    let factor = pow10(shift)?;
    let truncated = if shift >= 0 {
        numerator * factor / denominator
    } else {
        numerator / (denominator * factor)
    };

    Ok(BigDecimal::new(truncated, guard_scale)
        .with_scale_round(DIVISION_SCALE, RoundingMode::HalfUp))
}

/// 10^|exponent|
fn pow10(exponent: i64) -> CalcResult<BigInt> {
    let magnitude =
        u32::try_from(exponent.unsigned_abs()).map_err(|_| CalcError::ScaleOutOfRange(exponent))?;
    Ok(BigInt::from(10u8).pow(magnitude))
}
