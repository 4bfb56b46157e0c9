//! Configuration types for rental pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::{TaxTable, TaxTier};

/// The locale used to render amounts and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese: `1.234,56`, `10 de novembro de 2020`.
    #[serde(rename = "pt-BR", alias = "pt-br")]
    PtBr,
    /// United States English: `1,234.56`, `November 10, 2020`.
    #[serde(rename = "en-US", alias = "en-us")]
    EnUs,
}

impl Locale {
    /// Returns the thousands grouping separator.
    pub fn group_separator(&self) -> char {
        match self {
            Locale::PtBr => '.',
            Locale::EnUs => ',',
        }
    }

    /// Returns the decimal separator.
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }
}

/// The currency whose symbol prefixes formatted amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian Real.
    Brl,
    /// United States Dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Returns the display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

/// Locale and currency applied to every formatted amount and date.
///
/// # Example
///
/// ```
/// use rental_engine::config::{Currency, FormatConfig, Locale};
///
/// let format = FormatConfig::default();
/// assert_eq!(format.locale, Locale::PtBr);
/// assert_eq!(format.currency, Currency::Brl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// The locale for number and date rendering.
    pub locale: Locale,
    /// The currency for amount rendering.
    pub currency: Currency,
}

impl FormatConfig {
    /// Creates a format configuration.
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(Locale::PtBr, Currency::Brl)
    }
}

/// Tax table configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxesConfig {
    /// Tiers in lookup order.
    pub tiers: Vec<TaxTier>,
}

/// The complete rental configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalConfig {
    format: FormatConfig,
    tax_table: TaxTable,
}

impl RentalConfig {
    /// Creates a new RentalConfig from its component parts.
    pub fn new(format: FormatConfig, tax_table: TaxTable) -> Self {
        Self { format, tax_table }
    }

    /// Returns the formatting configuration.
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    /// Returns the tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    /// Splits the configuration into its parts.
    pub fn into_parts(self) -> (FormatConfig, TaxTable) {
        (self.format, self.tax_table)
    }
}
