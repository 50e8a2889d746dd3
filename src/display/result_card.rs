//! Plain-text result cards and formatted result figures.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmploymentKind, TaxResult};

use super::format_currency;

/// Every figure of a [`TaxResult`] formatted for display, plus net pay per period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// Formatted gross pay.
    pub gross_pay: String,
    /// Formatted taxable income.
    pub taxable_income: String,
    /// Formatted income tax.
    pub tax: String,
    /// Formatted Medicare levy.
    pub medicare_levy: String,
    /// Formatted superannuation.
    pub superannuation: String,
    /// Formatted annual net pay.
    pub net_pay: String,
    /// Formatted monthly net pay.
    pub net_pay_monthly: String,
    /// Formatted fortnightly net pay.
    pub net_pay_fortnightly: String,
    /// Formatted weekly net pay.
    pub net_pay_weekly: String,
}

impl From<&TaxResult> for FormattedResult {
    fn from(result: &TaxResult) -> Self {
        let breakdown = result.period_breakdown();
        Self {
            gross_pay: format_currency(result.gross_pay),
            taxable_income: format_currency(result.taxable_income),
            tax: format_currency(result.tax),
            medicare_levy: format_currency(result.medicare_levy),
            superannuation: format_currency(result.superannuation),
            net_pay: format_currency(result.net_pay),
            net_pay_monthly: format_currency(breakdown.monthly),
            net_pay_fortnightly: format_currency(breakdown.fortnightly),
            net_pay_weekly: format_currency(breakdown.weekly),
        }
    }
}

/// One labelled line on a result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    /// The label shown on the left.
    pub label: String,
    /// The formatted amount shown on the right.
    pub value: String,
}

/// A result card for one employment kind.
///
/// # Example
///
/// ```
/// use pay_estimator::calculation::compute_pay;
/// use pay_estimator::display::ResultCard;
/// use pay_estimator::models::{EmploymentKind, PayFrequency};
/// use rust_decimal::Decimal;
///
/// let result = compute_pay(Decimal::from(100_000), PayFrequency::Annually, false, false, Decimal::from(52));
/// let card = ResultCard::new(EmploymentKind::Permanent, &result, Decimal::new(12, 2));
///
/// assert_eq!(card.net_pay, "$77,212");
/// assert!(card.to_string().contains("Income Tax"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Card title.
    pub title: String,
    /// Note about leave entitlements.
    pub subtitle: String,
    /// Gross, taxable, deductions and super lines.
    pub lines: Vec<CardLine>,
    /// Annual net pay.
    pub net_pay: String,
    /// Monthly, fortnightly and weekly net pay.
    pub periods: Vec<CardLine>,
}

impl ResultCard {
    /// Builds the card for a result. `super_rate` is shown in the super label.
    pub fn new(employment_kind: EmploymentKind, result: &TaxResult, super_rate: Decimal) -> Self {
        let subtitle = match employment_kind {
            EmploymentKind::Permanent => "Includes Sick Leave & Annual Leave",
            EmploymentKind::Contractor => "No Leave Entitlements",
        };
        let breakdown = result.period_breakdown();
        let percent = super_rate.saturating_mul(Decimal::ONE_HUNDRED).normalize();

        let lines = vec![
            line("Gross Income", format_currency(result.gross_pay)),
            line("Taxable Income", format_currency(result.taxable_income)),
            line("Income Tax", format!("-{}", format_currency(result.tax))),
            line(
                "Medicare Levy",
                format!("-{}", format_currency(result.medicare_levy)),
            ),
            line(
                &format!("Superannuation ({}%)", percent),
                format_currency(result.superannuation),
            ),
        ];

        let periods = vec![
            line("Monthly", format_currency(breakdown.monthly)),
            line("Fortnightly", format_currency(breakdown.fortnightly)),
            line("Weekly", format_currency(breakdown.weekly)),
        ];

        Self {
            title: employment_kind.name().to_string(),
            subtitle: subtitle.to_string(),
            lines,
            net_pay: format_currency(result.net_pay),
            periods,
        }
    }
}

fn line(label: &str, value: String) -> CardLine {
    CardLine {
        label: label.to_string(),
        value,
    }
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        for line in &self.lines {
            writeln!(f, "  {:<24}{:>14}", line.label, line.value)?;
        }
        writeln!(f, "  {:<24}{:>14}", "Net Pay (Annually)", self.net_pay)?;
        for line in &self.periods {
            writeln!(f, "    {:<22}{:>14}", line.label, line.value)?;
        }
        Ok(())
    }
}
