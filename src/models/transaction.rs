//! Transaction receipt model.

use serde::{Deserialize, Serialize};

use super::{Car, Customer};

/// The receipt produced by a successful rental.
///
/// Both `amount` and `due_date` are already formatted for display using the
/// rental service's locale and currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The customer who rented the car.
    pub customer: Customer,
    /// The car that was allocated.
    pub car: Car,
    /// The final amount, formatted as currency (e.g. "R$ 244,40").
    pub amount: String,
    /// The return date, formatted for the configured locale.
    pub due_date: String,
}

impl Transaction {
    /// Creates a new transaction receipt.
    pub fn new(
        customer: Customer,
        car: Car,
        amount: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            customer,
            car,
            amount: amount.into(),
            due_date: due_date.into(),
        }
    }
}
