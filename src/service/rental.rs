//! The rental service.
//!
//! Composes a car record store with the tax table to pick a car, price the
//! rental and build the transaction receipt. Each call is independent; the
//! service holds no state that changes between calls, and two concurrent
//! rentals may be offered the same car.

use chrono::Days;
use tracing::{debug, info, warn};

use crate::calculation::{
    PriceQuote, TaxTable, format_currency, format_date, quote_rental, validate_days,
};
use crate::config::{FormatConfig, RentalConfig};
use crate::error::{RentalError, RentalResult};
use crate::models::{Car, CarCategory, Customer, Transaction};
use crate::store::RecordStore;

use super::clock::{Clock, SystemClock};
use super::picker::{IndexPicker, RandomIndex};

/// Selects cars, prices rentals and issues transaction receipts.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rental_engine::config::RentalConfig;
/// use rental_engine::models::{Car, CarCategory, Customer};
/// use rental_engine::service::{FixedClock, FixedIndex, RentalService};
/// use rental_engine::store::InMemoryStore;
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let cars = InMemoryStore::new(vec![Car::new("car_001", "Fiat Uno", 2019)]);
/// let service = RentalService::new(cars, RentalConfig::default())
///     .with_picker(FixedIndex(0))
///     .with_clock(FixedClock(NaiveDate::from_ymd_opt(2020, 11, 5).unwrap()));
///
/// let customer = Customer::new("cus_001", "Ana", 20);
/// let category = CarCategory::new("cat_001", "Hatch", Decimal::new(376, 1))
///     .with_car_ids(vec!["car_001".to_string()]);
///
/// let receipt = service.rent(&customer, &category, 5).await.unwrap();
/// assert_eq!(receipt.amount, "R$\u{a0}206,80");
/// assert_eq!(receipt.due_date, "10 de novembro de 2020");
/// # });
/// ```
#[derive(Debug)]
pub struct RentalService<S, P = RandomIndex, C = SystemClock> {
    cars: S,
    tax_table: TaxTable,
    format: FormatConfig,
    picker: P,
    clock: C,
}

impl<S> RentalService<S>
where
    S: RecordStore<Record = Car>,
{
    /// Creates a service with random car selection and the system clock.
    pub fn new(cars: S, config: RentalConfig) -> Self {
        let (format, tax_table) = config.into_parts();
        Self {
            cars,
            tax_table,
            format,
            picker: RandomIndex,
            clock: SystemClock,
        }
    }
}

impl<S, P, C> RentalService<S, P, C> {
    /// Replaces the index picker used for car selection.
    pub fn with_picker<Q: IndexPicker>(self, picker: Q) -> RentalService<S, Q, C> {
        RentalService {
            cars: self.cars,
            tax_table: self.tax_table,
            format: self.format,
            picker,
            clock: self.clock,
        }
    }

    /// Replaces the clock used for due dates.
    pub fn with_clock<D: Clock>(self, clock: D) -> RentalService<S, P, D> {
        RentalService {
            cars: self.cars,
            tax_table: self.tax_table,
            format: self.format,
            picker: self.picker,
            clock,
        }
    }

    /// Returns the car store.
    pub fn cars(&self) -> &S {
        &self.cars
    }

    /// Returns the tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    /// Returns the formatting configuration.
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }
}

impl<S, P, C> RentalService<S, P, C>
where
    S: RecordStore<Record = Car>,
    P: IndexPicker,
    C: Clock,
{
    /// Picks a car identifier from the category, uniformly at random.
    ///
    /// # Returns
    ///
    /// Returns one of `category.car_ids`, or an error if:
    /// - the category has no cars (`EmptyCategory`)
    /// - the picker returned an index outside the list (`SelectionOutOfRange`)
    pub fn select_car<'a>(&self, category: &'a CarCategory) -> RentalResult<&'a str> {
        let len = category.car_ids.len();
        if len == 0 {
            return Err(RentalError::EmptyCategory {
                category_id: category.id.clone(),
            });
        }

        let index = self.picker.pick(len);
        let car_id = category
            .car_ids
            .get(index)
            .map(String::as_str)
            .ok_or(RentalError::SelectionOutOfRange { index, len })?;

        debug!(category_id = %category.id, index, car_id = %car_id, "Selected car");
        Ok(car_id)
    }

    /// Picks a car from the category and loads it from the store.
    ///
    /// A selected identifier missing from the store fails with
    /// `RecordNotFound`; no other car is tried.
    pub async fn resolve_car(&self, category: &CarCategory) -> RentalResult<Car> {
        let car_id = self.select_car(category)?;

        self.cars.find(car_id).await.inspect_err(|err| {
            warn!(
                category_id = %category.id,
                car_id = %car_id,
                error = %err,
                "Car lookup failed"
            );
        })
    }

    /// Calculates the unformatted price breakdown for a rental.
    pub fn quote(
        &self,
        customer: &Customer,
        category: &CarCategory,
        days: u32,
    ) -> RentalResult<PriceQuote> {
        let quote = quote_rental(customer, category, days, &self.tax_table).inspect_err(|err| {
            warn!(customer_id = %customer.id, age = customer.age, error = %err, "Pricing failed");
        })?;

        debug!(customer_id = %customer.id, reasoning = %quote.reasoning, "Quoted rental");
        Ok(quote)
    }

    /// Calculates the final rental price, formatted as currency.
    pub fn price_rental(
        &self,
        customer: &Customer,
        category: &CarCategory,
        days: u32,
    ) -> RentalResult<String> {
        let quote = self.quote(customer, category, days)?;
        Ok(format_currency(quote.total, &self.format))
    }

    /// Rents a car from the category to the customer for `days` days.
    ///
    /// # Returns
    ///
    /// Returns the transaction receipt. Any failure (invalid day count,
    /// empty category, missing car, unmatched age) returns the error and
    /// produces no transaction.
    pub async fn rent(
        &self,
        customer: &Customer,
        category: &CarCategory,
        days: u32,
    ) -> RentalResult<Transaction> {
        validate_days(days)?;

        let car = self.resolve_car(category).await?;
        let amount = self.price_rental(customer, category, days)?;

        let today = self.clock.today();
        let due = today
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| RentalError::CalculationError {
                message: format!("due date overflow: {} + {} days", today, days),
            })?;
        let due_date = format_date(due, &self.format);

        info!(
            customer_id = %customer.id,
            category_id = %category.id,
            car_id = %car.id,
            days,
            amount = %amount,
            due_date = %due_date,
            "Rental completed"
        );

        Ok(Transaction::new(customer.clone(), car, amount, due_date))
    }
}
