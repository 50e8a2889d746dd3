//! Superannuation split.
//!
//! Separates annual gross pay into taxable income and the superannuation
//! contribution according to the [`SuperTreatment`] of the rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmploymentKind, SuperTreatment};

/// Returns the 2024-25 superannuation guarantee rate (12%).
pub fn super_guarantee_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Annual gross divided into taxable income and super.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperSplit {
    /// Income subject to tax and Medicare levy.
    pub taxable_income: Decimal,
    /// The superannuation contribution.
    pub superannuation: Decimal,
}

/// Calculates the super contribution on an annual amount at 12%.
///
/// When `includes_super` is true the amount is a package of salary plus super,
/// so the salary is `amount / 1.12` and super is the remainder. Otherwise super
/// is 12% of the amount.
///
/// # Examples
///
/// ```
/// use pay_estimator::calculation::calculate_super;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_super(Decimal::from(100_000), false), Decimal::from(12_000));
/// assert_eq!(calculate_super(Decimal::from(112_000), true), Decimal::from(12_000));
/// ```
pub fn calculate_super(base_income: Decimal, includes_super: bool) -> Decimal {
    let treatment = if includes_super {
        SuperTreatment::Inclusive
    } else {
        SuperTreatment::OnTop
    };
    calculate_super_with(base_income, treatment, super_guarantee_rate())
}

/// Calculates the super contribution for a treatment at an explicit rate.
///
/// Results saturate at the `Decimal` bounds. An inclusive split at a rate of
/// -100% has no salary to divide out and yields no super.
pub fn calculate_super_with(
    base_income: Decimal,
    treatment: SuperTreatment,
    rate: Decimal,
) -> Decimal {
    match treatment {
        SuperTreatment::Inclusive => base_income
            .checked_div(Decimal::ONE.saturating_add(rate))
            .map(|salary| base_income.saturating_sub(salary))
            .unwrap_or(Decimal::ZERO),
        SuperTreatment::OnTop => base_income.saturating_mul(rate),
    }
}

/// Splits annual gross pay for an employment kind at the 12% rate.
///
/// Contractors are always split as super-inclusive, whatever `super_included`
/// says.
pub fn split_super(
    annual_gross: Decimal,
    employment_kind: EmploymentKind,
    super_included: bool,
) -> SuperSplit {
    split_super_with(
        annual_gross,
        employment_kind.super_treatment(super_included),
        super_guarantee_rate(),
    )
}

/// Splits annual gross pay for a treatment at an explicit rate.
///
/// For inclusive rates super is carved out of gross and taxable income is the
/// remainder. For on-top rates taxable income is the full gross and super is
/// paid in addition.
pub fn split_super_with(
    annual_gross: Decimal,
    treatment: SuperTreatment,
    rate: Decimal,
) -> SuperSplit {
    let superannuation = calculate_super_with(annual_gross, treatment, rate);
    let taxable_income = match treatment {
        SuperTreatment::Inclusive => annual_gross.saturating_sub(superannuation),
        SuperTreatment::OnTop => annual_gross,
    };

    SuperSplit {
        taxable_income,
        superannuation,
    }
}
