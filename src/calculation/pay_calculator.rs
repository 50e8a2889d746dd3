//! The pay estimate pipeline.
//!
//! [`PayCalculator`] chains annualisation, the super split, income tax and the
//! Medicare levy into a [`TaxResult`]. Every call is independent and depends
//! only on its input and the calculator's rate table.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{
    AuditStep, AuditTrace, CalculationInput, EmploymentKind, PayCalculation, PayComparison,
    PayFrequency, SuperTreatment, TaxResult,
};

use super::annualization::annualize_with;
use super::income_tax::{bracket_for, calculate_tax_with};
use super::medicare_levy::calculate_medicare_levy_with;
use super::superannuation::{SuperSplit, split_super_with};

/// Estimates take-home pay against one financial year's rates.
///
/// # Example
///
/// ```
/// use pay_estimator::calculation::PayCalculator;
/// use pay_estimator::models::{CalculationInput, PayFrequency};
/// use rust_decimal::Decimal;
///
/// let calculator = PayCalculator::default();
/// let input = CalculationInput::permanent(Decimal::from(100_000), PayFrequency::Annually);
/// let result = calculator.calculate(&input);
///
/// assert_eq!(result.tax, Decimal::from(20_788));
/// assert_eq!(result.superannuation, Decimal::from(12_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayCalculator {
    rates: RateConfig,
}

/// Intermediate figures of one run through the pipeline.
struct Stages {
    annual_gross: Decimal,
    treatment: SuperTreatment,
    split: SuperSplit,
    tax: Decimal,
    medicare_levy: Decimal,
    net_pay: Decimal,
}

impl Stages {
    fn result(&self) -> TaxResult {
        TaxResult {
            gross_pay: self.annual_gross,
            taxable_income: self.split.taxable_income,
            tax: self.tax,
            medicare_levy: self.medicare_levy,
            superannuation: self.split.superannuation,
            net_pay: self.net_pay,
        }
    }
}

impl PayCalculator {
    /// Creates a calculator for the given rate table.
    pub fn new(rates: RateConfig) -> Self {
        Self { rates }
    }

    /// Returns the rate table in use.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Estimates annual pay figures for one input.
    pub fn calculate(&self, input: &CalculationInput) -> TaxResult {
        self.run(input).result()
    }

    /// Estimates annual pay figures and records each step taken.
    pub fn explain(&self, input: &CalculationInput) -> PayCalculation {
        let stages = self.run(input);
        let reference = format!("ATO resident rates {}", self.rates.financial_year);

        let steps = vec![
            self.annualisation_step(1, &reference, input, &stages),
            self.super_split_step(2, &reference, input, &stages),
            self.income_tax_step(3, &reference, &stages),
            self.medicare_levy_step(4, &reference, &stages),
            net_pay_step(5, &reference, &stages),
        ];

        PayCalculation {
            input: *input,
            result: stages.result(),
            audit_trace: AuditTrace { steps },
        }
    }

    /// Estimates a permanent and a contractor input side by side.
    ///
    /// The inputs are evaluated as given; their `employment_kind` fields decide
    /// the super treatment, not their position in the comparison.
    pub fn compare(
        &self,
        permanent: &CalculationInput,
        contractor: &CalculationInput,
    ) -> PayComparison {
        PayComparison {
            permanent: self.calculate(permanent),
            contractor: self.calculate(contractor),
        }
    }

    fn run(&self, input: &CalculationInput) -> Stages {
        let annual_gross = annualize_with(
            input.amount,
            input.frequency,
            input.working_weeks_per_year,
            &self.rates.working_pattern,
        );
        let treatment = input.super_treatment();
        let split = split_super_with(annual_gross, treatment, self.rates.super_guarantee_rate);
        let tax = calculate_tax_with(split.taxable_income, &self.rates.tax_brackets);
        let medicare_levy =
            calculate_medicare_levy_with(split.taxable_income, &self.rates.medicare_levy);
        let net_pay = split
            .taxable_income
            .saturating_sub(tax)
            .saturating_sub(medicare_levy);

        Stages {
            annual_gross,
            treatment,
            split,
            tax,
            medicare_levy,
            net_pay,
        }
    }

    fn annualisation_step(
        &self,
        step_number: u32,
        reference: &str,
        input: &CalculationInput,
        stages: &Stages,
    ) -> AuditStep {
        let pattern = &self.rates.working_pattern;
        let amount = input.amount.normalize();
        let weeks = input.working_weeks_per_year.normalize();
        let gross = stages.annual_gross.normalize();

        let reasoning = match input.frequency {
            PayFrequency::Hourly => format!(
                "${} x {} hours x {} days x {} weeks = ${}",
                amount,
                pattern.hours_per_day.normalize(),
                pattern.days_per_week.normalize(),
                weeks,
                gross
            ),
            PayFrequency::Daily => format!(
                "${} x {} days x {} weeks = ${}",
                amount,
                pattern.days_per_week.normalize(),
                weeks,
                gross
            ),
            PayFrequency::Weekly => format!("${} x {} weeks = ${}", amount, weeks, gross),
            PayFrequency::Fortnightly => {
                format!("${} x ({} weeks / 2) = ${}", amount, weeks, gross)
            }
            PayFrequency::Monthly => format!("${} x 12 months = ${}", amount, gross),
            PayFrequency::Annually => format!("Annual rate ${} used as quoted", gross),
        };

        AuditStep {
            step_number,
            rule_id: "annualisation".to_string(),
            rule_name: "Annualisation".to_string(),
            reference: reference.to_string(),
            input: serde_json::json!({
                "amount": amount.to_string(),
                "frequency": input.frequency,
                "working_weeks_per_year": weeks.to_string(),
                "working_weeks_applied": input.frequency.uses_working_weeks()
            }),
            output: serde_json::json!({
                "annual_gross": gross.to_string()
            }),
            reasoning,
        }
    }

    fn super_split_step(
        &self,
        step_number: u32,
        reference: &str,
        input: &CalculationInput,
        stages: &Stages,
    ) -> AuditStep {
        let rate = self.rates.super_guarantee_rate.normalize();
        let gross = stages.annual_gross.normalize();
        let superannuation = stages.split.superannuation.normalize();

        let reasoning = match (input.employment_kind, stages.treatment) {
            (EmploymentKind::Contractor, _) => format!(
                "Contractor rate includes super: ${} - ${} / (1 + {}) = ${} super",
                gross, gross, rate, superannuation
            ),
            (EmploymentKind::Permanent, SuperTreatment::Inclusive) => format!(
                "Package includes super: ${} - ${} / (1 + {}) = ${} super",
                gross, gross, rate, superannuation
            ),
            (EmploymentKind::Permanent, SuperTreatment::OnTop) => format!(
                "Super paid on top of base salary: ${} x {} = ${}",
                gross, rate, superannuation
            ),
        };

        AuditStep {
            step_number,
            rule_id: "super_split".to_string(),
            rule_name: "Superannuation Split".to_string(),
            reference: reference.to_string(),
            input: serde_json::json!({
                "annual_gross": gross.to_string(),
                "employment_kind": input.employment_kind,
                "super_included": input.super_included,
                "super_rate": rate.to_string()
            }),
            output: serde_json::json!({
                "treatment": stages.treatment,
                "taxable_income": stages.split.taxable_income.normalize().to_string(),
                "superannuation": superannuation.to_string()
            }),
            reasoning,
        }
    }

    fn income_tax_step(&self, step_number: u32, reference: &str, stages: &Stages) -> AuditStep {
        let income = stages.split.taxable_income.normalize();
        let tax = stages.tax.normalize();
        let bracket = bracket_for(stages.split.taxable_income, &self.rates.tax_brackets);

        let reasoning = match bracket {
            Some(bracket) => format!(
                "${} + (${} - ${}) x {} = ${}",
                bracket.base_tax.normalize(),
                income,
                bracket.threshold.normalize(),
                bracket.marginal_rate.normalize(),
                tax
            ),
            None => format!("${} is within the tax-free threshold", income),
        };

        AuditStep {
            step_number,
            rule_id: "income_tax".to_string(),
            rule_name: "Income Tax".to_string(),
            reference: reference.to_string(),
            input: serde_json::json!({
                "taxable_income": income.to_string()
            }),
            output: serde_json::json!({
                "tax": tax.to_string(),
                "bracket_threshold": bracket.map(|b| b.threshold.normalize().to_string()),
                "marginal_rate": bracket.map(|b| b.marginal_rate.normalize().to_string())
            }),
            reasoning,
        }
    }

    fn medicare_levy_step(&self, step_number: u32, reference: &str, stages: &Stages) -> AuditStep {
        let levy = &self.rates.medicare_levy;
        let income = stages.split.taxable_income.normalize();
        let applied = stages.split.taxable_income > levy.low_income_threshold;

        let reasoning = if applied {
            format!(
                "${} x {} = ${}",
                income,
                levy.rate.normalize(),
                stages.medicare_levy.normalize()
            )
        } else {
            format!(
                "No levy: ${} is at or below the ${} threshold",
                income,
                levy.low_income_threshold.normalize()
            )
        };

        AuditStep {
            step_number,
            rule_id: "medicare_levy".to_string(),
            rule_name: "Medicare Levy".to_string(),
            reference: reference.to_string(),
            input: serde_json::json!({
                "taxable_income": income.to_string(),
                "threshold": levy.low_income_threshold.normalize().to_string()
            }),
            output: serde_json::json!({
                "medicare_levy": stages.medicare_levy.normalize().to_string(),
                "levy_applied": applied
            }),
            reasoning,
        }
    }
}

fn net_pay_step(step_number: u32, reference: &str, stages: &Stages) -> AuditStep {
    let income = stages.split.taxable_income.normalize();
    let tax = stages.tax.normalize();
    let levy = stages.medicare_levy.normalize();
    let net = stages.net_pay.normalize();

    AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        reference: reference.to_string(),
        input: serde_json::json!({
            "taxable_income": income.to_string(),
            "tax": tax.to_string(),
            "medicare_levy": levy.to_string()
        }),
        output: serde_json::json!({
            "net_pay": net.to_string()
        }),
        reasoning: format!("${} - ${} - ${} = ${}", income, tax, levy, net),
    }
}

/// Estimates annual pay with the built-in 2024-25 rates.
///
/// `includes_super` is ignored for contractors. Pass `false` and 52 weeks for
/// the usual permanent defaults.
///
/// # Examples
///
/// ```
/// use pay_estimator::calculation::compute_pay;
/// use pay_estimator::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let result = compute_pay(Decimal::from(100), PayFrequency::Daily, true, true, Decimal::from(48));
/// assert_eq!(result.gross_pay, Decimal::from(24_000));
/// ```
pub fn compute_pay(
    amount: Decimal,
    frequency: PayFrequency,
    is_contractor: bool,
    includes_super: bool,
    working_weeks_per_year: Decimal,
) -> TaxResult {
    let input = CalculationInput::new(
        amount,
        frequency,
        EmploymentKind::from_contractor_flag(is_contractor),
    )
    .with_super_included(includes_super)
    .with_working_weeks(working_weeks_per_year);

    PayCalculator::default().calculate(&input)
}
