//! The input collector and its sanitising rules.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::InputDefaults;
use crate::models::{CalculationInput, EmploymentKind, PayFrequency, full_year_weeks};

/// Largest rate the input layer accepts, at any frequency ($1 trillion).
///
/// Anything above it is treated like any other unusable amount and replaced by
/// the default.
pub fn amount_ceiling() -> Decimal {
    Decimal::from(1_000_000_000_000i64)
}

/// Anything that can produce a [`CalculationInput`] from user-entered values.
pub trait InputCollector {
    /// Builds an input, replacing missing or invalid values with `defaults`.
    fn collect(&self, defaults: &InputDefaults) -> CalculationInput;
}

/// The raw fields of a pay form, shared by permanent and contractor forms.
///
/// Only the fields relevant to the employment kind are read: `super_included`
/// for permanent employees and `working_weeks` for contractors.
///
/// # Example
///
/// ```
/// use pay_estimator::config::InputDefaults;
/// use pay_estimator::input::{InputCollector, InputForm};
/// use pay_estimator::models::{EmploymentKind, PayFrequency};
/// use rust_decimal::Decimal;
///
/// let form = InputForm::new(EmploymentKind::Contractor)
///     .with_amount("$1,200")
///     .with_frequency("daily")
///     .with_working_weeks("not a number");
///
/// let input = form.collect(&InputDefaults::default());
/// assert_eq!(input.amount, Decimal::from(1200));
/// assert_eq!(input.frequency, PayFrequency::Daily);
/// assert_eq!(input.working_weeks_per_year, Decimal::from(48));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputForm {
    /// Which form this is.
    pub employment_kind: EmploymentKind,
    /// The rate as typed.
    #[serde(default)]
    pub amount: Option<String>,
    /// The selected frequency name.
    #[serde(default)]
    pub frequency: Option<String>,
    /// The "rate includes superannuation" toggle.
    #[serde(default)]
    pub super_included: Option<bool>,
    /// Working weeks per year as typed.
    #[serde(default)]
    pub working_weeks: Option<String>,
}

impl InputForm {
    /// Creates an empty form for an employment kind.
    pub fn new(employment_kind: EmploymentKind) -> Self {
        Self {
            employment_kind,
            amount: None,
            frequency: None,
            super_included: None,
            working_weeks: None,
        }
    }

    /// Sets the typed amount.
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Sets the selected frequency name.
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Sets the super toggle.
    pub fn with_super_included(mut self, super_included: bool) -> Self {
        self.super_included = Some(super_included);
        self
    }

    /// Sets the typed working weeks.
    pub fn with_working_weeks(mut self, working_weeks: impl Into<String>) -> Self {
        self.working_weeks = Some(working_weeks.into());
        self
    }
}

impl InputCollector for InputForm {
    fn collect(&self, defaults: &InputDefaults) -> CalculationInput {
        let amount = self
            .amount
            .as_deref()
            .and_then(parse_amount)
            .unwrap_or(defaults.amount);

        let frequency = self
            .frequency
            .as_deref()
            .and_then(PayFrequency::from_name)
            .unwrap_or(defaults.frequency);

        let (super_included, working_weeks) = match self.employment_kind {
            EmploymentKind::Permanent => (
                self.super_included.unwrap_or(defaults.super_included),
                defaults.permanent_working_weeks,
            ),
            EmploymentKind::Contractor => (
                true,
                self.working_weeks
                    .as_deref()
                    .and_then(parse_working_weeks)
                    .unwrap_or(defaults.contractor_working_weeks),
            ),
        };

        CalculationInput::new(amount, frequency, self.employment_kind)
            .with_super_included(super_included)
            .with_working_weeks(working_weeks)
    }
}

/// Parses a typed rate.
///
/// Surrounding whitespace, a leading `$` and thousands separators are
/// accepted. Returns `None` for empty, unparsable or negative values, and for
/// values above [`amount_ceiling`].
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    Decimal::from_str(&cleaned)
        .ok()
        .filter(|amount| !amount.is_sign_negative() && *amount <= amount_ceiling())
}

/// Parses typed working weeks, accepting only values from 1 to 52 inclusive.
pub fn parse_working_weeks(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim())
        .ok()
        .filter(|weeks| *weeks >= Decimal::ONE && *weeks <= full_year_weeks())
}
