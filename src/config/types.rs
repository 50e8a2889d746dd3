//! Configuration types for the pay estimator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the built-in
//! 2024-25 resident rates they default to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayFrequency, full_year_weeks};

/// One marginal tax bracket.
///
/// Income above `threshold` (up to the next bracket's threshold) is taxed at
/// `marginal_rate`, on top of `base_tax`, which is the cumulative tax owed at
/// `threshold` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income above which this bracket applies.
    pub threshold: Decimal,
    /// Tax owed on income up to the threshold.
    pub base_tax: Decimal,
    /// Rate applied to each dollar above the threshold.
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket from its threshold, base tax and marginal rate.
    pub fn new(threshold: Decimal, base_tax: Decimal, marginal_rate: Decimal) -> Self {
        Self {
            threshold,
            base_tax,
            marginal_rate,
        }
    }

    /// Tax owed on `income`, assuming `income` falls within this bracket.
    ///
    /// Saturates at the `Decimal` bounds instead of overflowing.
    pub fn tax_on(&self, income: Decimal) -> Decimal {
        self.base_tax.saturating_add(
            income
                .saturating_sub(self.threshold)
                .saturating_mul(self.marginal_rate),
        )
    }

    /// Tax owed on `income`, or `None` if any step leaves the `Decimal` range.
    pub fn checked_tax_on(&self, income: Decimal) -> Option<Decimal> {
        income
            .checked_sub(self.threshold)?
            .checked_mul(self.marginal_rate)?
            .checked_add(self.base_tax)
    }
}

/// Returns the 2024-25 resident tax brackets.
///
/// Income up to the first threshold ($18,200) is tax free.
pub fn resident_brackets_2024_25() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(Decimal::from(18_200), Decimal::ZERO, Decimal::new(16, 2)),
        TaxBracket::new(
            Decimal::from(45_000),
            Decimal::from(4_288),
            Decimal::new(30, 2),
        ),
        TaxBracket::new(
            Decimal::from(135_000),
            Decimal::from(31_288),
            Decimal::new(37, 2),
        ),
        TaxBracket::new(
            Decimal::from(190_000),
            Decimal::from(51_638),
            Decimal::new(45, 2),
        ),
    ]
}

/// Medicare levy settings.
///
/// The levy is a flat step: nothing at or below the threshold, the full rate
/// on all taxable income above it. There is no shading-in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareLevyConfig {
    /// The levy rate.
    pub rate: Decimal,
    /// Taxable income at or below which no levy is payable.
    pub low_income_threshold: Decimal,
}

impl Default for MedicareLevyConfig {
    fn default() -> Self {
        Self {
            rate: Decimal::new(2, 2),
            low_income_threshold: Decimal::from(26_000),
        }
    }
}

/// The standard working pattern used to annualise hourly and daily rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingPattern {
    /// Ordinary hours in a working day.
    pub hours_per_day: Decimal,
    /// Working days in a week.
    pub days_per_week: Decimal,
}

impl WorkingPattern {
    /// The standard 7.6 hour day, five day week.
    pub fn standard() -> Self {
        Self {
            hours_per_day: Decimal::new(76, 1),
            days_per_week: Decimal::from(5),
        }
    }
}

impl Default for WorkingPattern {
    fn default() -> Self {
        Self::standard()
    }
}

/// The rate table for a single financial year.
///
/// Loaded from `rates.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// The financial year these rates apply to (e.g. "2024-25").
    pub financial_year: String,
    /// Superannuation guarantee rate.
    pub super_guarantee_rate: Decimal,
    /// Medicare levy settings.
    pub medicare_levy: MedicareLevyConfig,
    /// Working pattern for annualising hourly and daily rates.
    pub working_pattern: WorkingPattern,
    /// Marginal tax brackets, lowest threshold first.
    pub tax_brackets: Vec<TaxBracket>,
}

impl RateConfig {
    /// The built-in 2024-25 resident rates.
    pub fn resident_2024_25() -> Self {
        Self {
            financial_year: "2024-25".to_string(),
            super_guarantee_rate: Decimal::new(12, 2),
            medicare_levy: MedicareLevyConfig::default(),
            working_pattern: WorkingPattern::standard(),
            tax_brackets: resident_brackets_2024_25(),
        }
    }

    /// Checks that the table is internally consistent.
    ///
    /// Brackets must have strictly ascending thresholds, the first bracket must
    /// start from zero tax, and each bracket's base tax must equal the tax owed
    /// at its threshold under the previous bracket, so that tax is continuous.
    pub fn validate(&self) -> EngineResult<()> {
        if self.super_guarantee_rate.is_sign_negative() {
            return Err(invalid("super_guarantee_rate must not be negative"));
        }
        if self.medicare_levy.rate.is_sign_negative() {
            return Err(invalid("medicare_levy.rate must not be negative"));
        }
        if self.working_pattern.hours_per_day <= Decimal::ZERO
            || self.working_pattern.days_per_week <= Decimal::ZERO
        {
            return Err(invalid("working_pattern values must be positive"));
        }

        let first = self
            .tax_brackets
            .first()
            .ok_or_else(|| invalid("at least one tax bracket is required"))?;
        if !first.base_tax.is_zero() {
            return Err(invalid(format!(
                "first bracket at {} must have zero base tax, found {}",
                first.threshold, first.base_tax
            )));
        }

        for bracket in &self.tax_brackets {
            if bracket.marginal_rate.is_sign_negative() {
                return Err(invalid(format!(
                    "bracket at {} has a negative marginal rate",
                    bracket.threshold
                )));
            }
        }

        for pair in self.tax_brackets.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.threshold <= lower.threshold {
                return Err(invalid(format!(
                    "bracket thresholds must ascend: {} follows {}",
                    upper.threshold, lower.threshold
                )));
            }
            let expected = lower.checked_tax_on(upper.threshold).ok_or_else(|| {
                invalid(format!(
                    "tax accrued below {} is out of range",
                    upper.threshold
                ))
            })?;
            if expected != upper.base_tax {
                return Err(invalid(format!(
                    "tax is discontinuous at {}: base tax {} but {} accrued below it",
                    upper.threshold, upper.base_tax, expected
                )));
            }
        }

        Ok(())
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self::resident_2024_25()
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidRateConfig {
        message: message.into(),
    }
}

/// Defaults the input layer substitutes for missing or invalid values.
///
/// Loaded from `defaults.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Amount used when the entered amount cannot be parsed.
    pub amount: Decimal,
    /// Frequency used when none, or an unknown one, is selected.
    pub frequency: PayFrequency,
    /// Whether a permanent rate includes super when not stated.
    pub super_included: bool,
    /// Working weeks per year for permanent employees.
    pub permanent_working_weeks: Decimal,
    /// Working weeks per year for contractors when not given or out of range.
    pub contractor_working_weeks: Decimal,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            amount: Decimal::ZERO,
            frequency: PayFrequency::Annually,
            super_included: false,
            permanent_working_weeks: full_year_weeks(),
            contractor_working_weeks: Decimal::from(48),
        }
    }
}
