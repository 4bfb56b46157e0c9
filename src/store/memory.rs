//! In-memory record store.

use crate::error::{RentalError, RentalResult};

use super::{Record, RecordStore};

/// A record store backed by a vector held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryStore<R> {
    records: Vec<R>,
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> InMemoryStore<R> {
    /// Creates a store holding the given records.
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> RecordStore for InMemoryStore<R>
where
    R: Record + Clone + Send + Sync,
{
    type Record = R;

    async fn find(&self, id: &str) -> RentalResult<R> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| RentalError::RecordNotFound { id: id.to_string() })
    }

    async fn find_all(&self) -> RentalResult<Vec<R>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, Customer};

    fn create_test_store() -> InMemoryStore<Car> {
        InMemoryStore::new(vec![
            Car::new("car_001", "Fiat Uno", 2019),
            Car::new("car_002", "VW Gol", 2021),
            Car::new("car_003", "Chevrolet Onix", 2022),
        ])
    }

    #[tokio::test]
    async fn test_find_returns_matching_record() {
        let store = create_test_store();

        let car = store.find("car_002").await.unwrap();
        assert_eq!(car.name, "VW Gol");
    }

    #[tokio::test]
    async fn test_find_unknown_id_returns_not_found() {
        let store = create_test_store();

        match store.find("car_999").await {
            Err(RentalError::RecordNotFound { id }) => assert_eq!(id, "car_999"),
            other => panic!("Expected RecordNotFound error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_all_preserves_order() {
        let store = create_test_store();

        let ids: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|car| car.id)
            .collect();
        assert_eq!(ids, vec!["car_001", "car_002", "car_003"]);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store: InMemoryStore<Customer> = InMemoryStore::default();

        assert!(store.is_empty());
        assert!(store.find_all().await.unwrap().is_empty());
        assert!(store.find("cus_001").await.is_err());
    }

    #[test]
    fn test_default_store_for_record_without_default() {
        let store = InMemoryStore::<Car>::default();
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_find_returns_first_of_duplicate_ids() {
        let store = InMemoryStore::new(vec![
            Car::new("car_001", "First", 2019),
            Car::new("car_001", "Second", 2020),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.find("car_001").await.unwrap().name, "First");
    }
}
