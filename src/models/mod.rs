//! Core data models for the Car Rental Engine.
//!
//! All models are plain values: the engine reads them and composes new
//! [`Transaction`] values, but never mutates them in place.

mod car;
mod car_category;
mod customer;
mod transaction;

pub use car::Car;
pub use car_category::CarCategory;
pub use customer::Customer;
pub use transaction::Transaction;
