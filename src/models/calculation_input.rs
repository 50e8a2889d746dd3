//! Calculation input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmploymentKind, PayFrequency, SuperTreatment};

/// Returns the default number of working weeks per year (a full year).
pub fn full_year_weeks() -> Decimal {
    Decimal::from(52)
}

/// Everything the engine needs for one estimate.
///
/// Inputs are plain values: each estimate is evaluated independently and
/// nothing is retained between calls.
///
/// # Example
///
/// ```
/// use pay_estimator::models::{CalculationInput, PayFrequency};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::contractor(Decimal::from(800), PayFrequency::Daily)
///     .with_working_weeks(Decimal::from(46));
/// assert!(input.super_included);
/// assert_eq!(input.working_weeks_per_year, Decimal::from(46));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The quoted rate.
    pub amount: Decimal,
    /// How often the quoted rate is paid.
    pub frequency: PayFrequency,
    /// Permanent employee or contractor.
    pub employment_kind: EmploymentKind,
    /// Whether the rate already includes super. Ignored for contractors.
    pub super_included: bool,
    /// Weeks worked per year, used when annualising hourly to fortnightly rates.
    pub working_weeks_per_year: Decimal,
}

impl CalculationInput {
    /// Creates an input with super paid on top and a full working year.
    pub fn new(amount: Decimal, frequency: PayFrequency, employment_kind: EmploymentKind) -> Self {
        Self {
            amount,
            frequency,
            employment_kind,
            super_included: false,
            working_weeks_per_year: full_year_weeks(),
        }
    }

    /// Creates an input for a permanent employee.
    pub fn permanent(amount: Decimal, frequency: PayFrequency) -> Self {
        Self::new(amount, frequency, EmploymentKind::Permanent)
    }

    /// Creates an input for a contractor. Contractor rates always include super.
    pub fn contractor(amount: Decimal, frequency: PayFrequency) -> Self {
        Self::new(amount, frequency, EmploymentKind::Contractor).with_super_included(true)
    }

    /// Sets whether the rate includes super.
    pub fn with_super_included(mut self, super_included: bool) -> Self {
        self.super_included = super_included;
        self
    }

    /// Sets the number of working weeks per year.
    pub fn with_working_weeks(mut self, working_weeks_per_year: Decimal) -> Self {
        self.working_weeks_per_year = working_weeks_per_year;
        self
    }

    /// Returns the super treatment this input resolves to.
    pub fn super_treatment(&self) -> SuperTreatment {
        self.employment_kind.super_treatment(self.super_included)
    }
}
