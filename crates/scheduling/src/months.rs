//! Month labels for the appointment filter control.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::materialize::Appointment;

/// The label a date files under: "November 2025".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Distinct month labels covered by the appointment set, chronological.
pub fn month_labels(appointments: &[Appointment]) -> Vec<String> {
    let months: BTreeSet<(i32, u32)> = appointments
        .iter()
        .map(|a| (a.date.year(), a.date.month()))
        .collect();
    months
        .into_iter()
        .filter_map(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
        .map(month_label)
        .collect()
}

/// Keep only appointments whose date falls in the labelled calendar month.
pub fn filter_by_month(appointments: Vec<Appointment>, label: &str) -> Vec<Appointment> {
    appointments
        .into_iter()
        .filter(|a| month_label(a.date) == label)
        .collect()
}
