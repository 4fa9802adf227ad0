//! Section expansion into concrete appointments.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use petsched_core::{PetCount, Tier};

use crate::recurrence;
use crate::section::{AppointmentSection, SectionTiming};

/// How a materialized appointment ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentTiming {
    Duration { minutes: i64 },
    EndTime { time: NaiveTime },
}

/// One concrete, dated appointment. Immutable once produced; lives only for
/// the duration of a computation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub service_type: String,
    /// Positional label ("Customer 1"), 1-based within the section. Not a
    /// stable identity: the same label can denote different customer lines
    /// across sections.
    pub customer_label: String,
    pub number_of_pets: PetCount,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub timing: AppointmentTiming,
    pub staff_pay_tier: Tier,
    pub price_tier: Tier,
    pub is_recurring: bool,
    pub section_index: usize,
}

impl Appointment {
    /// Duration in minutes, or `None` for end-time-based appointments.
    pub fn duration_minutes(&self) -> Option<i64> {
        match self.timing {
            AppointmentTiming::Duration { minutes } => Some(minutes),
            AppointmentTiming::EndTime { .. } => None,
        }
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        match self.timing {
            AppointmentTiming::Duration { .. } => None,
            AppointmentTiming::EndTime { time } => Some(time),
        }
    }
}

/// Expand every actionable section into dates × customers appointments.
///
/// Incomplete sections are skipped whole. A section with D dates and C
/// customer lines yields exactly D×C appointments, in section order, then
/// date order, then customer order. Pure function of its input.
pub fn materialize(sections: &[AppointmentSection]) -> Vec<Appointment> {
    let mut appointments = Vec::new();

    for (section_index, section) in sections.iter().enumerate() {
        if !section.is_actionable() {
            debug!(section = section_index, "skipping incomplete section");
            continue;
        }
        let (Some(service_type), Some(start_date), Some(start_time)) = (
            section.service_type.as_deref(),
            section.start_date,
            section.start_time,
        ) else {
            continue;
        };

        let dates = section_dates(section, start_date);
        let timing = match section.timing {
            SectionTiming::DurationBased { minutes } => AppointmentTiming::Duration { minutes },
            SectionTiming::EndDateBased { end_time, .. } => AppointmentTiming::EndTime {
                time: end_time,
            },
        };

        for date in dates {
            for (customer_index, customer) in section.customers.iter().enumerate() {
                appointments.push(Appointment {
                    service_type: service_type.to_string(),
                    customer_label: format!("Customer {}", customer_index + 1),
                    number_of_pets: customer.number_of_pets.clone(),
                    date,
                    start_time,
                    timing,
                    staff_pay_tier: section.staff_pay_tier,
                    price_tier: customer.price_tier,
                    is_recurring: section.recurrence.is_some(),
                    section_index,
                });
            }
        }
    }

    appointments
}

/// The dates a section occupies: the recurrence expansion when a rule with
/// selected weekdays is present, else just the start date. A rule without an
/// end date recurs only through the start date itself.
fn section_dates(section: &AppointmentSection, start_date: NaiveDate) -> Vec<NaiveDate> {
    match &section.recurrence {
        Some(rule) if !rule.days_of_week.is_empty() => recurrence::generate(
            start_date,
            rule.end_date.unwrap_or(start_date),
            rule.frequency,
            rule.every,
            &rule.days_of_week,
        ),
        _ => vec![start_date],
    }
}
