//! Rental price calculation.
//!
//! The final price of a rental is the category's base price, scaled by the
//! multiplier of the customer's age tier, times the number of days:
//!
//! ```text
//! total = category.price * tier.multiplier * days
//! ```

use rust_decimal::Decimal;

use crate::error::{RentalError, RentalResult};
use crate::models::{CarCategory, Customer};

use super::tax_table::{TaxTable, TaxTier};

/// The unformatted breakdown of a rental price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// The category's base daily price.
    pub base_price: Decimal,
    /// The tax tier matched by the customer's age.
    pub tier: TaxTier,
    /// The number of rental days.
    pub days: u32,
    /// The final price before formatting.
    pub total: Decimal,
    /// Human-readable explanation of the calculation.
    pub reasoning: String,
}

/// Rejects a day count that is not a positive integer.
pub fn validate_days(days: u32) -> RentalResult<()> {
    if days == 0 {
        return Err(RentalError::InvalidRentalDays { days });
    }
    Ok(())
}

/// Calculates the price of renting a car from `category` for `days` days.
///
/// # Returns
///
/// Returns a `PriceQuote`, or an error if:
/// - `days` is zero (`InvalidRentalDays`)
/// - the customer's age matches no tier (`NoMatchingTier`)
/// - the total does not fit in a `Decimal` (`CalculationError`)
///
/// # Examples
///
/// ```
/// use rental_engine::calculation::{TaxTable, TaxTier, quote_rental};
/// use rental_engine::models::{CarCategory, Customer};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::new(vec![TaxTier::new(40, 50, Decimal::from_str("1.3").unwrap())]);
/// let customer = Customer::new("cus_001", "Joana", 50);
/// let category = CarCategory::new("cat_001", "Hatch", Decimal::from_str("37.6").unwrap());
///
/// let quote = quote_rental(&customer, &category, 5, &table).unwrap();
/// assert_eq!(quote.total, Decimal::from_str("244.4").unwrap());
/// ```
pub fn quote_rental(
    customer: &Customer,
    category: &CarCategory,
    days: u32,
    tax_table: &TaxTable,
) -> RentalResult<PriceQuote> {
    validate_days(days)?;

    let tier = *tax_table.tier_for(customer.age)?;

    let total = category
        .price
        .checked_mul(tier.multiplier)
        .and_then(|daily| daily.checked_mul(Decimal::from(days)))
        .ok_or_else(|| RentalError::CalculationError {
            message: format!(
                "price overflow: {} x {} x {} days",
                category.price, tier.multiplier, days
            ),
        })?;

    let reasoning = format!(
        "{} x {} (age {} in tier {}-{}) x {} days = {}",
        category.price.normalize(),
        tier.multiplier.normalize(),
        customer.age,
        tier.from,
        tier.to,
        days,
        total.normalize()
    );

    Ok(PriceQuote {
        base_price: category.price,
        tier,
        days,
        total,
        reasoning,
    })
}
