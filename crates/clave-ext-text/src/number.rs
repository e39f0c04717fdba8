//! Lenient number parsing.
//!
//! Integers accept surrounding whitespace and a leading sign. Decimals also
//! accept a `.` decimal point, `,` group separators in the integer part and a
//! trailing sign. Anything else is rejected and the caller's fallback is used.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses an `i32`, allowing surrounding whitespace and a leading sign.
pub fn parse_int(value: &str) -> Option<i32> {
    i32::from_str(value.trim()).ok()
}

/// Parses a [`Decimal`] in invariant number style.
///
/// ```
/// use clave_ext_text::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal(" 1,234.50 "), Some(Decimal::new(123450, 2)));
/// assert_eq!(parse_decimal("12-"), Some(Decimal::new(-12, 0)));
/// assert_eq!(parse_decimal("1.2.3"), None);
/// ```
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();

    let (negative, body) = split_sign(trimmed)?;
    if body.is_empty() {
        return None;
    }

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    if int_part.starts_with(',') {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    if let Some(frac) = frac_part {
        if !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }

    let digits: String = int_part.chars().filter(|c| *c != ',').collect();
    let frac = frac_part.unwrap_or("");
    if digits.is_empty() && frac.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(digits.len() + frac.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if digits.is_empty() { "0" } else { &digits });
    if !frac.is_empty() {
        normalized.push('.');
        normalized.push_str(frac);
    }

    Decimal::from_str(&normalized).ok()
}

/// Splits off one leading or trailing sign. Both at once is rejected.
fn split_sign(value: &str) -> Option<(bool, &str)> {
    let leading = value
        .strip_prefix('-')
        .map(|rest| (true, rest))
        .or_else(|| value.strip_prefix('+').map(|rest| (false, rest)));

    let (negative, rest) = match leading {
        Some((negative, rest)) => (Some(negative), rest.trim_start()),
        None => (None, value),
    };

    let trailing = rest
        .strip_suffix('-')
        .map(|body| (true, body))
        .or_else(|| rest.strip_suffix('+').map(|body| (false, body)));

    match (negative, trailing) {
        (Some(_), Some(_)) => None,
        (Some(negative), None) => Some((negative, rest)),
        (None, Some((negative, body))) => Some((negative, body.trim_end())),
        (None, None) => Some((false, rest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_accepts_whitespace_and_sign() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  -7 "), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
    }

    #[test]
    fn int_rejects_garbage_and_overflow() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("12abc"), None);
        assert_eq!(parse_int("1,000"), None);
        assert_eq!(parse_int("2147483648"), None);
    }

    #[test]
    fn decimal_plain_and_fractional() {
        assert_eq!(parse_decimal("10"), Some(Decimal::new(10, 0)));
        assert_eq!(parse_decimal("0.25"), Some(Decimal::new(25, 2)));
        assert_eq!(parse_decimal(".5"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_decimal("5."), Some(Decimal::new(5, 0)));
    }

    #[test]
    fn decimal_group_separators() {
        assert_eq!(parse_decimal("1,000,000"), Some(Decimal::new(1_000_000, 0)));
        assert_eq!(parse_decimal("1,0.5"), Some(Decimal::new(105, 1)));
        assert_eq!(parse_decimal("1.000,5"), None);
        assert_eq!(parse_decimal(",5"), None);
    }

    #[test]
    fn decimal_signs() {
        assert_eq!(parse_decimal("-1.5"), Some(Decimal::new(-15, 1)));
        assert_eq!(parse_decimal("+1.5"), Some(Decimal::new(15, 1)));
        assert_eq!(parse_decimal("1.5-"), Some(Decimal::new(-15, 1)));
        assert_eq!(parse_decimal("-1.5-"), None);
        assert_eq!(parse_decimal("-"), None);
    }

    #[test]
    fn decimal_rejects_other_forms() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("1e5"), None);
        assert_eq!(parse_decimal("1_000"), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("."), None);
    }
}
