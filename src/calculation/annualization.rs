//! Annualisation of quoted rates.
//!
//! Converts a rate at any [`PayFrequency`] into an annual gross figure using
//! the standard working pattern of 7.6 hours a day, five days a week.

use rust_decimal::Decimal;

use crate::config::WorkingPattern;
use crate::models::PayFrequency;

/// Annualises a rate using the standard working pattern.
///
/// `working_weeks` only affects hourly, daily, weekly and fortnightly rates;
/// monthly and annual rates are taken to already cover the full year. The
/// value is not range checked: zero or negative weeks simply produce a zero or
/// negative annual figure.
///
/// # Examples
///
/// ```
/// use pay_estimator::calculation::convert_to_annual;
/// use pay_estimator::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let annual = convert_to_annual(Decimal::from(50), PayFrequency::Hourly, Decimal::from(52));
/// assert_eq!(annual, Decimal::from(98_800));
/// ```
pub fn convert_to_annual(
    amount: Decimal,
    frequency: PayFrequency,
    working_weeks: Decimal,
) -> Decimal {
    annualize_with(amount, frequency, working_weeks, &WorkingPattern::standard())
}

/// Annualises a rate using an explicit working pattern.
///
/// Products that would leave the `Decimal` range saturate at its bounds.
pub fn annualize_with(
    amount: Decimal,
    frequency: PayFrequency,
    working_weeks: Decimal,
    pattern: &WorkingPattern,
) -> Decimal {
    match frequency {
        PayFrequency::Hourly => amount
            .saturating_mul(pattern.hours_per_day)
            .saturating_mul(pattern.days_per_week)
            .saturating_mul(working_weeks),
        PayFrequency::Daily => amount
            .saturating_mul(pattern.days_per_week)
            .saturating_mul(working_weeks),
        PayFrequency::Weekly => amount.saturating_mul(working_weeks),
        PayFrequency::Fortnightly => amount.saturating_mul(working_weeks / Decimal::TWO),
        PayFrequency::Monthly => amount.saturating_mul(Decimal::from(12)),
        PayFrequency::Annually => amount,
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
    fn test_hourly_uses_hours_days_and_weeks() {
        assert_eq!(
            convert_to_annual(dec("50"), PayFrequency::Hourly, dec("52")),
            dec("98800")
        );
    }

    #[test]
    fn test_daily_uses_days_and_weeks() {
        assert_eq!(
            convert_to_annual(dec("100"), PayFrequency::Daily, dec("48")),
            dec("24000")
        );
    }

    #[test]
    fn test_weekly_uses_weeks() {
        assert_eq!(
            convert_to_annual(dec("1000"), PayFrequency::Weekly, dec("52")),
            dec("52000")
        );
    }

    #[test]
    fn test_fortnightly_uses_half_the_weeks() {
        assert_eq!(
            convert_to_annual(dec("4000"), PayFrequency::Fortnightly, dec("52")),
            dec("104000")
        );
        assert_eq!(
            convert_to_annual(dec("4000"), PayFrequency::Fortnightly, dec("47")),
            dec("94000")
        );
    }

    #[test]
    fn test_monthly_ignores_working_weeks() {
        assert_eq!(
            convert_to_annual(dec("8000"), PayFrequency::Monthly, dec("48")),
            dec("96000")
        );
        assert_eq!(
            convert_to_annual(dec("8000"), PayFrequency::Monthly, dec("1")),
            dec("96000")
        );
    }

    #[test]
    fn test_annually_is_unchanged() {
        assert_eq!(
            convert_to_annual(dec("123456.78"), PayFrequency::Annually, dec("10")),
            dec("123456.78")
        );
    }

    #[test]
    fn test_zero_weeks_produce_zero_for_week_based_frequencies() {
        assert_eq!(
            convert_to_annual(dec("100"), PayFrequency::Weekly, Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_weeks_propagate_without_error() {
        assert_eq!(
            convert_to_annual(dec("100"), PayFrequency::Daily, dec("-2")),
            dec("-1000")
        );
    }

    #[test]
    fn test_custom_working_pattern() {
        let pattern = WorkingPattern {
            hours_per_day: dec("8"),
            days_per_week: dec("4"),
        };

        assert_eq!(
            annualize_with(dec("10"), PayFrequency::Hourly, dec("50"), &pattern),
            dec("16000")
        );
    }

    #[test]
    fn test_out_of_range_product_saturates() {
        let huge = dec("1000000000000000000000000000");

        assert_eq!(
            convert_to_annual(huge, PayFrequency::Hourly, dec("52")),
            Decimal::MAX
        );
        assert_eq!(
            convert_to_annual(huge * dec("10"), PayFrequency::Monthly, dec("52")),
            Decimal::MAX
        );
        assert_eq!(
            convert_to_annual(-huge, PayFrequency::Daily, dec("52")),
            Decimal::MIN
        );
    }
}
