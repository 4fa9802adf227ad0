//! Free-text pet counts.

use serde::{Deserialize, Serialize};

use crate::coerce;

/// Number of pets as entered ("1 pet", "2 pets", …).
///
/// The text is kept verbatim because rate matching tries an exact
/// (trimmed, case-insensitive) text comparison before falling back to the
/// extracted cardinal. Data entry offers a closed set of values, but legacy
/// catalog rows may carry arbitrary phrasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetCount(String);

impl PetCount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form for exact matching: trimmed and lowercased.
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// Extracted cardinal: the first whitespace-separated token that parses
    /// as an integer, defaulting to 1 when no token parses.
    pub fn cardinal(&self) -> i64 {
        coerce::first_int_token(&self.0).unwrap_or(1)
    }
}

impl Default for PetCount {
    fn default() -> Self {
        Self("1 pet".to_string())
    }
}

impl From<&str> for PetCount {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for PetCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
