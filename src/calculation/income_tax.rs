//! Income tax calculation.
//!
//! Applies the progressive resident tax brackets to taxable income. There are
//! no offsets and no non-resident rates.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, resident_brackets_2024_25};

/// Calculates income tax on taxable income at 2024-25 resident rates.
///
/// | Taxable income        | Tax                                   |
/// |-----------------------|---------------------------------------|
/// | up to 18,200          | nil                                   |
/// | 18,201 to 45,000      | 16c for each $1 over 18,200           |
/// | 45,001 to 135,000     | 4,288 plus 30c for each $1 over 45,000  |
/// | 135,001 to 190,000    | 31,288 plus 37c for each $1 over 135,000 |
/// | over 190,000          | 51,638 plus 45c for each $1 over 190,000 |
///
/// Zero or negative income owes no tax.
///
/// # Examples
///
/// ```
/// use pay_estimator::calculation::calculate_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_tax(Decimal::from(45_000)), Decimal::from(4_288));
/// assert_eq!(calculate_tax(Decimal::from(-500)), Decimal::ZERO);
/// ```
pub fn calculate_tax(taxable_income: Decimal) -> Decimal {
    calculate_tax_with(taxable_income, &resident_brackets_2024_25())
}

/// Calculates income tax against an explicit bracket table.
///
/// `brackets` must be ordered by ascending threshold. Income at or below the
/// first threshold is tax free; a bracket applies to income strictly above its
/// threshold.
pub fn calculate_tax_with(taxable_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    bracket_for(taxable_income, brackets)
        .map(|bracket| bracket.tax_on(taxable_income))
        .unwrap_or(Decimal::ZERO)
}

/// Returns the bracket that applies to `taxable_income`, or `None` when the
/// income is within the tax-free threshold.
pub fn bracket_for(taxable_income: Decimal, brackets: &[TaxBracket]) -> Option<&TaxBracket> {
    brackets
        .iter()
        .rev()
        .find(|bracket| taxable_income > bracket.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tax_free_threshold() {
        assert_eq!(calculate_tax(dec("0")), Decimal::ZERO);
        assert_eq!(calculate_tax(dec("10000")), Decimal::ZERO);
        assert_eq!(calculate_tax(dec("18200")), Decimal::ZERO);
    }

    #[test]
    fn test_first_cent_above_tax_free_threshold() {
        assert_eq!(calculate_tax(dec("18200.01")), dec("0.0016"));
    }

    #[test]
    fn test_continuous_at_45000() {
        assert_eq!(calculate_tax(dec("45000")), dec("4288"));
        assert_eq!(calculate_tax(dec("45000.01")), dec("4288.003"));
    }

    #[test]
    fn test_continuous_at_135000() {
        assert_eq!(calculate_tax(dec("135000")), dec("31288"));
        assert_eq!(calculate_tax(dec("135000.01")), dec("31288.0037"));
    }

    #[test]
    fn test_continuous_at_190000() {
        assert_eq!(calculate_tax(dec("190000")), dec("51638"));
        assert_eq!(calculate_tax(dec("190000.01")), dec("51638.0045"));
    }

    #[test]
    fn test_each_bracket() {
        assert_eq!(calculate_tax(dec("30000")), dec("1888"));
        assert_eq!(calculate_tax(dec("100000")), dec("20788"));
        assert_eq!(calculate_tax(dec("150000")), dec("36838"));
        assert_eq!(calculate_tax(dec("250000")), dec("78638"));
    }

    #[test]
    fn test_negative_income_owes_no_tax() {
        assert_eq!(calculate_tax(dec("-25000")), Decimal::ZERO);
    }

    #[test]
    fn test_bracket_for_boundaries() {
        let brackets = resident_brackets_2024_25();

        assert!(bracket_for(dec("18200"), &brackets).is_none());
        assert_eq!(
            bracket_for(dec("18200.01"), &brackets).unwrap().threshold,
            dec("18200")
        );
        assert_eq!(
            bracket_for(dec("135000"), &brackets).unwrap().threshold,
            dec("45000")
        );
        assert_eq!(
            bracket_for(dec("1000000"), &brackets).unwrap().threshold,
            dec("190000")
        );
    }

    #[test]
    fn test_empty_table_owes_no_tax() {
        assert_eq!(calculate_tax_with(dec("500000"), &[]), Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_monotonic_across_sample_incomes() {
        let mut previous = Decimal::ZERO;
        for income in (0..=300).map(|k| Decimal::from(k * 1_000)) {
            let tax = calculate_tax(income);
            assert!(tax >= previous, "tax fell at {}", income);
            previous = tax;
        }
    }

    #[test]
    fn test_tax_at_decimal_max_stays_below_income() {
        let tax = calculate_tax(Decimal::MAX);
        assert!(tax > Decimal::ZERO);
        assert!(tax < Decimal::MAX);
    }

    #[test]
    fn test_steep_bracket_saturates() {
        let brackets = [TaxBracket::new(Decimal::ZERO, Decimal::ZERO, dec("2"))];
        assert_eq!(calculate_tax_with(Decimal::MAX, &brackets), Decimal::MAX);
    }
}
