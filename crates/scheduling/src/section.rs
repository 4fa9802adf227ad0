//! Appointment template sections.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use petsched_core::{PetCount, Tier};

use crate::recurrence::RecurrenceRule;

/// How a section's appointments end: a fixed duration or an explicit end.
///
/// Exactly one of the two exists by construction: the variant is the
/// `uses_end_date` discriminant, so there is no second field to forget to
/// clear when the service type changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionTiming {
    DurationBased { minutes: i64 },
    EndDateBased { end_date: NaiveDate, end_time: NaiveTime },
}

impl SectionTiming {
    pub fn is_duration_based(&self) -> bool {
        matches!(self, Self::DurationBased { .. })
    }
}

/// One customer line within a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLine {
    pub number_of_pets: PetCount,
    pub price_tier: Tier,
}

/// A single appointment template before expansion.
///
/// Sections are built incrementally by the external form, so the required
/// fields are optional here; the materializer skips any section that is not
/// yet complete. A `Some` recurrence rule is the "is recurring" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSection {
    pub service_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub timing: SectionTiming,
    pub customers: Vec<CustomerLine>,
    #[serde(default)]
    pub staff_pay_tier: Tier,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
}

impl AppointmentSection {
    /// Whether the section is complete enough to materialize.
    ///
    /// Mirrors the form contract: a section needs a service type, a start
    /// date and a start time; everything else has workable defaults.
    pub fn is_actionable(&self) -> bool {
        self.service_type
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
            && self.start_date.is_some()
            && self.start_time.is_some()
    }
}
