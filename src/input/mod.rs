//! Input collection for the pay estimator.
//!
//! Forms deliver raw text. This module turns that text into a
//! [`CalculationInput`](crate::models::CalculationInput), substituting the
//! configured defaults for anything missing or unusable, so the engine is never
//! asked to reject a value.

mod collector;

pub use collector::{
    InputCollector, InputForm, amount_ceiling, parse_amount, parse_working_weeks,
};
