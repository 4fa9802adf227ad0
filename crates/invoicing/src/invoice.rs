//! Invoice aggregation over a computation pass's appointments.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use petsched_catalog::RateCatalog;
use petsched_core::format_minutes;
use petsched_pricing::resolve_price;
use petsched_scheduling::Appointment;

/// One invoice line: all appointments sharing a service type and duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// "<service type> - <human duration>", e.g. "Grooming - 1 hour".
    pub group_key: String,
    pub count: u32,
    pub total: Decimal,
}

/// The customer invoice for one pass: lines plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub lines: Vec<InvoiceLine>,
    pub grand_total: Decimal,
}

/// Group appointments by (service type, duration) and sum their resolved
/// prices, lines sorted lexically by group key.
///
/// End-time-based appointments carry no catalog-priced block and are
/// excluded. An appointment whose price cannot be resolved contributes zero
/// to its group's total but still counts; the invoice reflects every
/// duration-based appointment in the pass. A missing or empty catalog yields
/// an empty invoice, not a sheet of zero-priced lines.
pub fn aggregate(appointments: &[Appointment], catalog: &RateCatalog) -> InvoiceSummary {
    if catalog.is_empty() {
        return InvoiceSummary::default();
    }

    let mut groups: BTreeMap<String, (u32, Decimal)> = BTreeMap::new();

    for appointment in appointments {
        let Some(minutes) = appointment.duration_minutes() else {
            continue;
        };
        let key = format!(
            "{} - {}",
            appointment.service_type,
            format_minutes(minutes)
        );
        let price = resolve_price(appointment, catalog).unwrap_or(Decimal::ZERO);
        let entry = groups.entry(key).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += price;
    }

    let lines: Vec<InvoiceLine> = groups
        .into_iter()
        .map(|(group_key, (count, total))| InvoiceLine {
            group_key,
            count,
            total,
        })
        .collect();
    let grand_total = lines.iter().map(|line| line.total).sum();

    InvoiceSummary { lines, grand_total }
}
