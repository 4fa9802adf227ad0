//! Strongly-typed identifiers used across the domain.
//!
//! Catalog identifiers arrive from the storage layer as opaque text (the
//! tables are text-valued end to end), so these are string newtypes rather
//! than numeric ids. Comparison is on the trimmed text.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a service type (catalog reference data).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceTypeId(String);

/// Identifier of a service rate row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateId(String);

macro_rules! impl_text_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap raw catalog text as an identifier, trimming surrounding
            /// whitespace. Empty text is allowed here so half-filled rows can
            /// still be carried through tolerant computations.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into().trim().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            /// Strict parse for callers that require a non-empty identifier.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = Self::new(s);
                if id.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(id)
            }
        }
    };
}

impl_text_id!(ServiceTypeId, "ServiceTypeId");
impl_text_id!(RateId, "RateId");
