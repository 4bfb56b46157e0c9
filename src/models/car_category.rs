//! Car category model.
//!
//! A category groups cars that share a base daily price. Member cars are
//! referenced by identifier and resolved through a record store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A named group of cars sharing a base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    /// Unique identifier for the category.
    pub id: String,
    /// The category's display name.
    pub name: String,
    /// The base daily price, before the tax multiplier.
    pub price: Decimal,
    /// Identifiers of the cars in this category, in order.
    #[serde(default)]
    pub car_ids: Vec<String>,
}

impl CarCategory {
    /// Creates a new category with no member cars.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_engine::models::CarCategory;
    /// use rust_decimal::Decimal;
    ///
    /// let category = CarCategory::new("cat_001", "Hatch", Decimal::new(376, 1))
    ///     .with_car_ids(vec!["car_001".to_string()]);
    /// assert_eq!(category.car_ids.len(), 1);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            car_ids: Vec::new(),
        }
    }

    /// Returns a copy of this category with a different base price.
    pub fn with_price(self, price: Decimal) -> Self {
        Self { price, ..self }
    }

    /// Returns a copy of this category with a different set of member cars.
    pub fn with_car_ids(self, car_ids: Vec<String>) -> Self {
        Self { car_ids, ..self }
    }

    /// Returns true if the category has no member cars.
    pub fn is_empty(&self) -> bool {
        self.car_ids.is_empty()
    }
}

impl Record for CarCategory {
    fn id(&self) -> &str {
        &self.id
    }
}
