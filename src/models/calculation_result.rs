//! Calculation result models for the pay estimator.
//!
//! This module contains the [`TaxResult`] produced by every estimate, the
//! [`PeriodBreakdown`] derived from it, and the audit structures that explain
//! how a result was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationInput;

/// The annual figures of a single estimate.
///
/// Super is always carved out of gross, so `gross_pay == taxable_income +
/// superannuation` for inclusive rates, and `net_pay == taxable_income - tax -
/// medicare_levy` for every result.
///
/// # Example
///
/// ```
/// use pay_estimator::calculation::compute_pay;
/// use pay_estimator::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let result = compute_pay(Decimal::from(100_000), PayFrequency::Annually, false, false, Decimal::from(52));
/// assert_eq!(result.net_pay, Decimal::from(77_212));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Annualised gross pay as quoted.
    pub gross_pay: Decimal,
    /// Income subject to tax and Medicare levy after the super carve-out.
    pub taxable_income: Decimal,
    /// Income tax on the taxable income.
    pub tax: Decimal,
    /// Medicare levy on the taxable income.
    pub medicare_levy: Decimal,
    /// Annual superannuation contribution.
    pub superannuation: Decimal,
    /// Take-home pay after tax and levy.
    pub net_pay: Decimal,
}

impl TaxResult {
    /// Returns the total deducted from taxable income.
    pub fn total_deductions(&self) -> Decimal {
        self.tax.saturating_add(self.medicare_levy)
    }

    /// Splits annual net pay into monthly, fortnightly and weekly figures.
    pub fn period_breakdown(&self) -> PeriodBreakdown {
        PeriodBreakdown::from_annual(self.net_pay)
    }
}

/// Net pay expressed per pay period.
///
/// Each figure is a straight fraction of the annual amount; tax is not
/// recomputed per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    /// The annual amount.
    pub annually: Decimal,
    /// One twelfth of the annual amount.
    pub monthly: Decimal,
    /// One twenty-sixth of the annual amount.
    pub fortnightly: Decimal,
    /// One fifty-second of the annual amount.
    pub weekly: Decimal,
}

impl PeriodBreakdown {
    /// Divides an annual amount into period equivalents.
    pub fn from_annual(annual: Decimal) -> Self {
        Self {
            annually: annual,
            monthly: annual / Decimal::from(12),
            fortnightly: annual / Decimal::from(26),
            weekly: annual / Decimal::from(52),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Where the rule comes from (e.g. the rate table's financial year).
    pub reference: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit steps for one estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

/// An estimate together with the input that produced it and its audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// The input that was estimated.
    pub input: CalculationInput,
    /// The annual figures.
    pub result: TaxResult,
    /// How the figures were reached.
    pub audit_trace: AuditTrace,
}

/// A permanent and a contractor estimate side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComparison {
    /// The permanent employee estimate.
    pub permanent: TaxResult,
    /// The contractor estimate.
    pub contractor: TaxResult,
}

impl PayComparison {
    /// Contractor net pay minus permanent net pay.
    pub fn net_pay_difference(&self) -> Decimal {
        self.contractor.net_pay.saturating_sub(self.permanent.net_pay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result(net_pay: &str) -> TaxResult {
        TaxResult {
            gross_pay: dec("100000"),
            taxable_income: dec("100000"),
            tax: dec("20788"),
            medicare_levy: dec("2000"),
            superannuation: dec("12000"),
            net_pay: dec(net_pay),
        }
    }

    #[test]
    fn test_period_breakdown_divides_annual_net_pay() {
        let breakdown = sample_result("78000").period_breakdown();

        assert_eq!(breakdown.annually, dec("78000"));
        assert_eq!(breakdown.monthly, dec("6500"));
        assert_eq!(breakdown.fortnightly, dec("3000"));
        assert_eq!(breakdown.weekly, dec("1500"));
    }

    #[test]
    fn test_monthly_figures_sum_back_to_annual() {
        let breakdown = sample_result("77212").period_breakdown();
        let rebuilt = breakdown.monthly * Decimal::from(12);

        assert!((rebuilt - breakdown.annually).abs() < dec("0.000001"));
    }

    #[test]
    fn test_total_deductions() {
        assert_eq!(sample_result("77212").total_deductions(), dec("22788"));
    }

    #[test]
    fn test_net_pay_difference_is_contractor_minus_permanent() {
        let comparison = PayComparison {
            permanent: sample_result("77212"),
            contractor: sample_result("80000"),
        };

        assert_eq!(comparison.net_pay_difference(), dec("2788"));
    }

    #[test]
    fn test_audit_trace_step_lookup() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "annualisation".to_string(),
                rule_name: "Annualisation".to_string(),
                reference: "2024-25".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: String::new(),
            }],
        };

        assert!(trace.step("annualisation").is_some());
        assert!(trace.step("income_tax").is_none());
    }

    #[test]
    fn test_tax_result_serializes_decimals_as_strings() {
        let json = serde_json::to_value(sample_result("77212")).unwrap();

        assert_eq!(json["net_pay"].as_str().unwrap(), "77212");
        assert_eq!(json["medicare_levy"].as_str().unwrap(), "2000");
    }
}
