//! Record store abstraction for the Car Rental Engine.
//!
//! The rental service only needs read access to cars, so the store contract
//! is a keyed lookup plus full-collection retrieval. Backing storage is left
//! to the implementation:
//!
//! - [`InMemoryStore`] - a `Vec` of records
//! - [`JsonFileStore`] - a flat JSON array file keyed by `id`
//!
//! # Example
//!
//! ```
//! use rental_engine::models::Car;
//! use rental_engine::store::{InMemoryStore, RecordStore};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = InMemoryStore::new(vec![Car::new("car_001", "Fiat Uno", 2019)]);
//! let car = store.find("car_001").await.unwrap();
//! assert_eq!(car.name, "Fiat Uno");
//! # });
//! ```

use std::future::Future;

use crate::error::RentalResult;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// A value that can be stored and looked up by identifier.
pub trait Record {
    /// Returns the record's unique identifier.
    fn id(&self) -> &str;
}

/// Read-only keyed lookup over a homogeneous collection of records.
pub trait RecordStore: Send + Sync {
    /// The type of record held by this store.
    type Record: Record + Clone + Send;

    /// Returns the record whose identifier equals `id`.
    ///
    /// Fails with `RecordNotFound` if no such record exists.
    fn find(&self, id: &str) -> impl Future<Output = RentalResult<Self::Record>> + Send;

    /// Returns every record in the store, in storage order.
    fn find_all(&self) -> impl Future<Output = RentalResult<Vec<Self::Record>>> + Send;
}
