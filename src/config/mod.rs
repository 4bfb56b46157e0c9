//! Configuration loading and management for the Car Rental Engine.
//!
//! This module loads the locale/currency convention and the age-tiered tax
//! table from YAML files, so no formatter or table is global state.
//!
//! # Example
//!
//! ```no_run
//! use rental_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pt-br").unwrap().into_config();
//! println!("Tiers: {}", config.tax_table().tiers().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Currency, FormatConfig, Locale, RentalConfig, TaxesConfig};
