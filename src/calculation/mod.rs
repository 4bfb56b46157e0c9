//! Calculation logic for the Car Rental Engine.
//!
//! This module contains the age-tiered tax table lookup, the rental price
//! calculation, and the currency and date rendering used on receipts.

mod format;
mod price;
mod tax_table;

pub use format::{format_currency, format_date};
pub use price::{PriceQuote, quote_rental, validate_days};
pub use tax_table::{TaxTable, TaxTier};
