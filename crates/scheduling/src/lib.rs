//! `petsched-scheduling` — from appointment templates to concrete dates.
//!
//! A template section carries a service type, a start, a customer list and
//! an optional recurrence rule. This crate expands recurrence rules into
//! calendar dates, materializes sections into one appointment per customer
//! per date, and derives the month labels used to filter the result.

pub mod materialize;
pub mod months;
pub mod recurrence;
pub mod section;

pub use materialize::{Appointment, AppointmentTiming, materialize};
pub use months::{filter_by_month, month_label, month_labels};
pub use recurrence::{Frequency, RecurrenceRule, add_months, default_recurrence_end, generate};
pub use section::{AppointmentSection, CustomerLine, SectionTiming};
