//! Car model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Represents a single rentable car.
///
/// The availability flags are carried through to the transaction but are
/// not consulted when a car is selected from its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier for the car.
    pub id: String,
    /// The car's display name.
    pub name: String,
    /// Whether the car is currently available.
    pub available: bool,
    /// Whether the car has fuel.
    pub gas_available: bool,
    /// The year the car model was released.
    pub release_year: i32,
}

impl Car {
    /// Creates a new car that is available and fueled.
    pub fn new(id: impl Into<String>, name: impl Into<String>, release_year: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: true,
            gas_available: true,
            release_year,
        }
    }

    /// Returns a copy of this car with a different identifier.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }

    /// Returns a copy of this car with a different availability flag.
    pub fn with_available(self, available: bool) -> Self {
        Self { available, ..self }
    }

    /// Returns a copy of this car with a different fuel flag.
    pub fn with_gas_available(self, gas_available: bool) -> Self {
        Self {
            gas_available,
            ..self
        }
    }
}

impl Record for Car {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_car_with_camel_case_fields() {
        let json = r#"{
            "id": "car_001",
            "name": "Fiat Uno",
            "available": true,
            "gasAvailable": false,
            "releaseYear": 2019
        }"#;

        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "car_001");
        assert_eq!(car.name, "Fiat Uno");
        assert!(car.available);
        assert!(!car.gas_available);
        assert_eq!(car.release_year, 2019);
    }

    #[test]
    fn test_serialize_uses_camel_case_fields() {
        let car = Car::new("car_001", "Fiat Uno", 2019);
        let value = serde_json::to_value(&car).unwrap();

        assert_eq!(value["gasAvailable"], serde_json::json!(true));
        assert_eq!(value["releaseYear"], serde_json::json!(2019));
        assert!(value.get("gas_available").is_none());
    }

    #[test]
    fn test_new_car_is_available_and_fueled() {
        let car = Car::new("car_001", "Fiat Uno", 2019);
        assert!(car.available);
        assert!(car.gas_available);
    }

    #[test]
    fn test_overrides_return_new_values() {
        let car = Car::new("car_001", "Fiat Uno", 2019);
        let parked = car
            .clone()
            .with_available(false)
            .with_gas_available(false)
            .with_id("car_002");

        assert_eq!(parked.id, "car_002");
        assert!(!parked.available);
        assert!(!parked.gas_available);
        assert_eq!(parked.name, car.name);
        assert!(car.available);
    }
}
