//! Error types for the Car Rental Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing and allocating rentals.

use thiserror::Error;

/// The main error type for the Car Rental Engine.
///
/// Every failure is deterministic for a given input, so none of these
/// variants are retried by the engine.
///
/// # Example
///
/// ```
/// use rental_engine::error::RentalError;
///
/// let error = RentalError::RecordNotFound {
///     id: "car_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Record not found: car_404");
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backing file of a record store could not be read.
    #[error("Failed to read record store '{path}': {message}")]
    StoreReadError {
        /// The path of the backing file.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// The backing file of a record store did not contain a valid record array.
    #[error("Failed to parse record store '{path}': {message}")]
    StoreParseError {
        /// The path of the backing file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No record with the requested identifier exists in the store.
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The customer's age is not covered by any tier of the tax table.
    #[error("No tax tier matches age {age}")]
    NoMatchingTier {
        /// The age that fell outside every tier.
        age: u32,
    },

    /// A car category has no member cars to choose from.
    #[error("Car category '{category_id}' has no cars")]
    EmptyCategory {
        /// The ID of the empty category.
        category_id: String,
    },

    /// The index picker produced an index outside the category's car list.
    #[error("Selected index {index} is out of range for {len} cars")]
    SelectionOutOfRange {
        /// The index returned by the picker.
        index: usize,
        /// The number of cars in the category.
        len: usize,
    },

    /// The number of rental days was not a positive integer.
    #[error("Invalid rental days {days}: must be at least 1")]
    InvalidRentalDays {
        /// The rejected day count.
        days: u32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
