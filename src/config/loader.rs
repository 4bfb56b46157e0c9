//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rental
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::TaxTable;
use crate::error::{RentalError, RentalResult};

use super::types::{FormatConfig, RentalConfig, TaxesConfig};

/// Loads and provides access to rental configuration.
///
/// # Directory Structure
///
/// ```text
/// config/pt-br/
/// ├── format.yaml   # Locale and currency
/// └── taxes.yaml    # Age tiers and price multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pt-br")?;
/// let tier = loader.config().tax_table().tier_for(42)?;
/// println!("Multiplier: {}", tier.multiplier);
/// # Ok::<(), rental_engine::error::RentalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RentalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or if the tax table has no tiers.
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();

        let format = Self::load_yaml::<FormatConfig>(&path.join("format.yaml"))?;

        let taxes_path = path.join("taxes.yaml");
        let taxes = Self::load_yaml::<TaxesConfig>(&taxes_path)?;
        if taxes.tiers.is_empty() {
            return Err(RentalError::ConfigParseError {
                path: taxes_path.display().to_string(),
                message: "tax table has no tiers".to_string(),
            });
        }

        debug!(
            path = %path.display(),
            locale = ?format.locale,
            currency = ?format.currency,
            tiers = taxes.tiers.len(),
            "Loaded rental configuration"
        );

        let config = RentalConfig::new(format, TaxTable::new(taxes.tiers));
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RentalConfig {
        self.config
    }
}
