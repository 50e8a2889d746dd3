//! Configuration loading and management for the pay estimator.
//!
//! This module provides functionality to load the rate table for a financial
//! year (tax brackets, Medicare levy, superannuation guarantee rate and the
//! standard working pattern) and the input defaults from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pay_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/au-2024-25").unwrap();
//! println!("Loaded rates for {}", config.rates().financial_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    InputDefaults, MedicareLevyConfig, RateConfig, TaxBracket, WorkingPattern,
    resident_brackets_2024_25,
};
