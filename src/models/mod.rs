//! Core data models for the pay estimator.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod employment;
mod pay_frequency;

pub use calculation_input::{CalculationInput, full_year_weeks};
pub use calculation_result::{
    AuditStep, AuditTrace, PayCalculation, PayComparison, PeriodBreakdown, TaxResult,
};
pub use employment::{EmploymentKind, SuperTreatment};
pub use pay_frequency::PayFrequency;
