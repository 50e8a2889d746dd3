//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate tables and
//! input defaults from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{InputDefaults, RateConfig};

/// Loads and provides access to the estimator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/au-2024-25/
/// ├── rates.yaml     # Tax brackets, Medicare levy, super rate, working pattern
/// └── defaults.yaml  # Values substituted for missing or invalid input
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/au-2024-25").unwrap();
/// println!("Financial year: {}", loader.rates().financial_year);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoader {
    rates: RateConfig,
    defaults: InputDefaults,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or missing fields (`ConfigParseError`)
    /// - The rate table is inconsistent (`InvalidRateConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RateConfig>(&path.join("rates.yaml"))?;
        rates.validate()?;

        let defaults = Self::load_yaml::<InputDefaults>(&path.join("defaults.yaml"))?;

        debug!(
            path = %path.display(),
            financial_year = %rates.financial_year,
            brackets = rates.tax_brackets.len(),
            "Loaded rate configuration"
        );

        Ok(Self { rates, defaults })
    }

    /// Creates a loader from already-built configuration, validating the rates.
    pub fn from_parts(rates: RateConfig, defaults: InputDefaults) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates, defaults })
    }

    /// Returns a loader holding the built-in 2024-25 rates and default inputs.
    pub fn builtin() -> Self {
        Self {
            rates: RateConfig::resident_2024_25(),
            defaults: InputDefaults::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the input defaults.
    pub fn defaults(&self) -> &InputDefaults {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/au-2024-25"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pay-estimator-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rates().financial_year, "2024-25");
    }

    #[test]
    fn test_shipped_configuration_matches_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader, ConfigLoader::builtin());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("rates.yaml"), "financial_year: [unterminated").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_discontinuous_rates_returns_invalid_config() {
        let dir = scratch_dir("discontinuous");
        let mut rates = RateConfig::resident_2024_25();
        rates.tax_brackets[2].base_tax = Decimal::from(31_000);
        fs::write(
            dir.join("rates.yaml"),
            serde_yaml::to_string(&rates).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.join("defaults.yaml"),
            serde_yaml::to_string(&InputDefaults::default()).unwrap(),
        )
        .unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidRateConfig { .. })
        ));
    }

    #[test]
    fn test_missing_defaults_file_returns_error() {
        let dir = scratch_dir("no-defaults");
        fs::write(
            dir.join("rates.yaml"),
            serde_yaml::to_string(&RateConfig::resident_2024_25()).unwrap(),
        )
        .unwrap();
        let _ = fs::remove_file(dir.join("defaults.yaml"));

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("defaults.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_parts_validates_rates() {
        let mut rates = RateConfig::resident_2024_25();
        rates.tax_brackets.clear();

        assert!(ConfigLoader::from_parts(rates, InputDefaults::default()).is_err());
        assert!(
            ConfigLoader::from_parts(RateConfig::resident_2024_25(), InputDefaults::default())
                .is_ok()
        );
    }
}
