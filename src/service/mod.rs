//! Rental service for the Car Rental Engine.
//!
//! The [`RentalService`] is the entry point for callers. Randomness and the
//! current date are injected through [`IndexPicker`] and [`Clock`] so that
//! selection and due dates can be pinned in tests.

mod clock;
mod picker;
mod rental;

pub use clock::{Clock, FixedClock, SystemClock};
pub use picker::{FixedIndex, IndexPicker, RandomIndex, SeededIndex};
pub use rental::RentalService;
