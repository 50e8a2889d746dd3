//! Calculation logic for the pay estimator.
//!
//! This module contains the pure functions of the estimate pipeline:
//! annualisation of a quoted rate, the superannuation split, income tax,
//! the Medicare levy, and the [`PayCalculator`] that chains them into a
//! [`TaxResult`](crate::models::TaxResult).

mod annualization;
mod income_tax;
mod medicare_levy;
mod pay_calculator;
mod superannuation;

pub use annualization::{annualize_with, convert_to_annual};
pub use income_tax::{bracket_for, calculate_tax, calculate_tax_with};
pub use medicare_levy::{calculate_medicare_levy, calculate_medicare_levy_with};
pub use pay_calculator::{PayCalculator, compute_pay};
pub use superannuation::{
    SuperSplit, calculate_super, calculate_super_with, split_super, split_super_with,
    super_guarantee_rate,
};
