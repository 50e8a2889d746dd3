//! Currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Australian dollars with no cents.
///
/// Rounds half away from zero, groups thousands with commas and puts the
/// minus sign before the dollar sign.
///
/// # Examples
///
/// ```
/// use pay_estimator::display::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(7721250, 2)), "$77,213");
/// assert_eq!(format_currency(Decimal::from(-1500)), "-$1,500");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < Decimal::ZERO {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_currency(dec("0")), "$0");
        assert_eq!(format_currency(dec("7")), "$7");
        assert_eq!(format_currency(dec("999")), "$999");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_currency(dec("1000")), "$1,000");
        assert_eq!(format_currency(dec("77212")), "$77,212");
        assert_eq!(format_currency(dec("1234567")), "$1,234,567");
    }

    #[test]
    fn test_cents_are_rounded_half_away_from_zero() {
        assert_eq!(format_currency(dec("6434.333333")), "$6,434");
        assert_eq!(format_currency(dec("10714.5")), "$10,715");
        assert_eq!(format_currency(dec("-10714.5")), "-$10,715");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(dec("-5000")), "-$5,000");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec("-0.4")), "$0");
    }
}
