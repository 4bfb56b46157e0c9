//! JSON file record store.
//!
//! Records live in a single file holding a flat JSON array, each element
//! carrying an `id` field. The file is re-read on every lookup, so external
//! edits are picked up without reloading the store.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RentalError, RentalResult};

use super::{Record, RecordStore};

/// A record store backed by a JSON array file.
///
/// # Example
///
/// ```no_run
/// use rental_engine::models::Car;
/// use rental_engine::store::{JsonFileStore, RecordStore};
///
/// # async fn run() -> rental_engine::error::RentalResult<()> {
/// let cars: JsonFileStore<Car> = JsonFileStore::new("./database/cars.json");
/// let all = cars.find_all().await?;
/// println!("{} cars on file", all.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonFileStore<R> {
    /// Creates a store reading from the given file.
    ///
    /// The file is not touched until the first lookup.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: DeserializeOwned> JsonFileStore<R> {
    /// Reads and parses the whole backing file.
    async fn load(&self) -> RentalResult<Vec<R>> {
        let path_str = self.path.display().to_string();

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| RentalError::StoreReadError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let records: Vec<R> =
            serde_json::from_str(&content).map_err(|e| RentalError::StoreParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, records = records.len(), "Loaded record store");
        Ok(records)
    }
}

impl<R> RecordStore for JsonFileStore<R>
where
    R: Record + Clone + DeserializeOwned + Send,
{
    type Record = R;

    async fn find(&self, id: &str) -> RentalResult<R> {
        self.load()
            .await?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| RentalError::RecordNotFound { id: id.to_string() })
    }

    async fn find_all(&self) -> RentalResult<Vec<R>> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, CarCategory, Customer};

    fn fixture(name: &str) -> PathBuf {
        Path::new("./tests/fixtures").join(name)
    }

    #[tokio::test]
    async fn test_find_all_reads_every_car() {
        let store: JsonFileStore<Car> = JsonFileStore::new(fixture("cars.json"));

        let cars = store.find_all().await.unwrap();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0].id, "0b6a3e2c-6a55-4b8e-9e0b-5a7f4c2d1e01");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store: JsonFileStore<Car> = JsonFileStore::new(fixture("cars.json"));

        let car = store
            .find("0b6a3e2c-6a55-4b8e-9e0b-5a7f4c2d1e02")
            .await
            .unwrap();
        assert_eq!(car.name, "Volkswagen Gol");
        assert_eq!(car.release_year, 2020);
    }

    #[tokio::test]
    async fn test_find_unknown_id_returns_not_found() {
        let store: JsonFileStore<Car> = JsonFileStore::new(fixture("cars.json"));

        match store.find("missing").await {
            Err(RentalError::RecordNotFound { id }) => assert_eq!(id, "missing"),
            other => panic!("Expected RecordNotFound error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_record_types_load() {
        let customers: JsonFileStore<Customer> = JsonFileStore::new(fixture("customers.json"));
        let categories: JsonFileStore<CarCategory> =
            JsonFileStore::new(fixture("carCategory.json"));

        assert_eq!(customers.find_all().await.unwrap().len(), 3);
        let category = &categories.find_all().await.unwrap()[0];
        assert_eq!(category.car_ids.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_returns_read_error() {
        let store: JsonFileStore<Car> = JsonFileStore::new("/nonexistent/cars.json");

        match store.find_all().await {
            Err(RentalError::StoreReadError { path, .. }) => {
                assert!(path.contains("cars.json"));
            }
            other => panic!("Expected StoreReadError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_file_returns_parse_error() {
        let store: JsonFileStore<Car> = JsonFileStore::new(fixture("malformed.json"));

        assert!(matches!(
            store.find("anything").await,
            Err(RentalError::StoreParseError { .. })
        ));
    }

    #[test]
    fn test_path_accessor() {
        let store: JsonFileStore<Car> = JsonFileStore::new("database/cars.json");
        assert_eq!(store.path(), Path::new("database/cars.json"));
    }
}
