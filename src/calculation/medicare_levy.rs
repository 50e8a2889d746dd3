//! Medicare levy calculation.
//!
//! Uses a flat step: no levy at or below the low-income threshold, and 2% of
//! the whole taxable income above it. The statutory shading-in range is not
//! modelled, so incomes just over the threshold pay the full levy.

use rust_decimal::Decimal;

use crate::config::MedicareLevyConfig;

/// Calculates the Medicare levy with the 2024-25 rate and threshold.
///
/// # Examples
///
/// ```
/// use pay_estimator::calculation::calculate_medicare_levy;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_medicare_levy(Decimal::from(26_000)), Decimal::ZERO);
/// assert_eq!(calculate_medicare_levy(Decimal::from(100_000)), Decimal::from(2_000));
/// ```
pub fn calculate_medicare_levy(taxable_income: Decimal) -> Decimal {
    calculate_medicare_levy_with(taxable_income, &MedicareLevyConfig::default())
}

/// Calculates the Medicare levy with explicit settings. Saturates rather than
/// overflowing.
pub fn calculate_medicare_levy_with(taxable_income: Decimal, levy: &MedicareLevyConfig) -> Decimal {
    if taxable_income <= levy.low_income_threshold {
        return Decimal::ZERO;
    }
    taxable_income.saturating_mul(levy.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_no_levy_at_threshold() {
        assert_eq!(calculate_medicare_levy(dec("26000")), Decimal::ZERO);
    }

    #[test]
    fn test_full_levy_just_above_threshold() {
        assert_eq!(calculate_medicare_levy(dec("26000.01")), dec("520.0002"));
    }

    #[test]
    fn test_levy_is_two_percent_of_income() {
        assert_eq!(calculate_medicare_levy(dec("100000")), dec("2000"));
        assert_eq!(calculate_medicare_levy(dec("250000")), dec("5000"));
    }

    #[test]
    fn test_zero_and_negative_income_pay_no_levy() {
        assert_eq!(calculate_medicare_levy(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_medicare_levy(dec("-1000")), Decimal::ZERO);
    }

    #[test]
    fn test_explicit_settings() {
        let levy = MedicareLevyConfig {
            rate: dec("0.015"),
            low_income_threshold: dec("20000"),
        };

        assert_eq!(calculate_medicare_levy_with(dec("20000"), &levy), Decimal::ZERO);
        assert_eq!(calculate_medicare_levy_with(dec("40000"), &levy), dec("600"));
    }

    #[test]
    fn test_levy_at_decimal_max() {
        let levy = calculate_medicare_levy(Decimal::MAX);
        assert!(levy > Decimal::ZERO && levy < Decimal::MAX);
    }
}
