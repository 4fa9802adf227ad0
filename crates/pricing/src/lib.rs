//! `petsched-pricing` — rate resolution and tier arithmetic.
//!
//! Matches materialized appointments against the rate catalog (service type,
//! charge block, pet count) and applies the tier adjustment, plus the per-tier
//! rate tables the staff/customer views display.

pub mod resolver;
pub mod tables;

pub use resolver::{customer_price, match_rate, resolve_price, staff_hourly_rate};
pub use tables::{TierRateRow, pay_table, price_table};
