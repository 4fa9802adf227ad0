//! `petsched-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the scheduling
//! and pricing crates (no infrastructure concerns).

pub mod coerce;
pub mod duration;
pub mod error;
pub mod id;
pub mod pets;
pub mod tier;

pub use duration::{format_minutes, format_minutes_text};
pub use error::{DomainError, DomainResult};
pub use id::{RateId, ServiceTypeId};
pub use pets::PetCount;
pub use tier::Tier;
