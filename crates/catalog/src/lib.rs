//! `petsched-catalog` — service/rate reference data.
//!
//! The storage layer hands the engine two text-valued tables (service types
//! and service rates). This crate parses them into records, exposes the
//! active joined view that pricing and invoicing work against, and derives
//! the duration options a service type offers.

pub mod catalog;
pub mod durations;
pub mod records;

pub use catalog::{JoinedRate, RateCatalog};
pub use durations::duration_options;
pub use records::{RawRow, ServiceRateRecord, ServiceTypeRecord};
