//! Car Rental Engine
//!
//! This crate selects a car from a category, prices the rental from an
//! age-tiered tax table, and issues a transaction receipt. Car records are
//! read through the [`store::RecordStore`] abstraction.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
