//! Application state for the pay estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and a calculator built from its rates.
/// Both are read-only, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calculator: Arc<PayCalculator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calculator = PayCalculator::new(config.rates().clone());
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the calculator for the loaded rates.
    pub fn calculator(&self) -> &PayCalculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_calculator_uses_loaded_rates() {
        let state = AppState::new(ConfigLoader::builtin());

        assert_eq!(state.calculator().rates(), state.config().rates());
    }
}
