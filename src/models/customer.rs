//! Customer model.
//!
//! A customer's age is the only attribute that influences pricing; it
//! selects the tax tier applied to the category's base price.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Represents a customer renting a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer.
    pub id: String,
    /// The customer's name.
    pub name: String,
    /// The customer's age in whole years.
    pub age: u32,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_engine::models::Customer;
    ///
    /// let customer = Customer::new("cus_001", "Ana", 34);
    /// assert_eq!(customer.age, 34);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Returns a copy of this customer with a different age.
    pub fn with_age(self, age: u32) -> Self {
        Self { age, ..self }
    }

    /// Returns a copy of this customer with a different name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}
