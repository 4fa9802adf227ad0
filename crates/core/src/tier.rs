//! Price/pay tier labels.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A tier selecting a small additive adjustment to a base rate.
///
/// Customer price tiers and staff pay tiers share the same shape: an integer
/// (1–3 in well-formed data) whose adjustment is `tier * 0.01`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(u32);

impl Tier {
    /// Construct a tier, enforcing the catalog's 1–3 range.
    pub fn new(number: u32) -> DomainResult<Self> {
        if !(1..=3).contains(&number) {
            return Err(DomainError::invariant(format!(
                "tier must be between 1 and 3, got {number}"
            )));
        }
        Ok(Self(number))
    }

    /// Parse a legacy display label ("Price Tier 2", "Pay Tier 3").
    ///
    /// The trailing integer wins; labels without a "Tier" marker or without a
    /// parseable trailing token fall back to tier 1 rather than failing, so a
    /// stray label never blocks pricing.
    pub fn from_label(label: &str) -> Self {
        if !label.contains("Tier") {
            return Self(1);
        }
        let number = label
            .split_whitespace()
            .next_back()
            .and_then(|token| token.parse::<u32>().ok())
            .unwrap_or(1);
        Self(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Additive rate adjustment: tier 1 = 0.01, tier 2 = 0.02, tier 3 = 0.03.
    pub fn adjustment(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self(1)
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
