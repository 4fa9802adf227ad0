//! One scheduling pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use petsched_catalog::RateCatalog;
use petsched_invoicing::{InvoiceSummary, aggregate};
use petsched_pricing::resolve_price;
use petsched_scheduling::{
    Appointment, AppointmentSection, filter_by_month, materialize, month_labels,
};

/// An appointment annotated with its resolved price.
///
/// `price` is `None` when no catalog row matches. The UI must be able to
/// tell "we don't know the price" apart from "this is free".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedAppointment {
    pub appointment: Appointment,
    pub price: Option<Decimal>,
}

/// Everything one pass produces for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Chronological (date, then start time), stable over template order.
    pub appointments: Vec<PricedAppointment>,
    pub invoice: InvoiceSummary,
    /// Distinct "Month Year" labels over the *unfiltered* appointment set,
    /// so the filter control keeps offering every month.
    pub months: Vec<String>,
}

/// Run a full pass over every section.
pub fn run(sections: &[AppointmentSection], catalog: &RateCatalog) -> ScheduleRun {
    pass(sections, catalog, None)
}

/// Run a pass restricted to appointments in the labelled month
/// (e.g. "November 2025"); the invoice covers only the filtered set.
pub fn run_for_month(
    sections: &[AppointmentSection],
    catalog: &RateCatalog,
    month: &str,
) -> ScheduleRun {
    pass(sections, catalog, Some(month))
}

fn pass(sections: &[AppointmentSection], catalog: &RateCatalog, month: Option<&str>) -> ScheduleRun {
    let span = info_span!("schedule_pass", sections = sections.len());
    let _guard = span.enter();

    let all = materialize(sections);
    let months = month_labels(&all);

    let mut appointments = match month {
        Some(label) => filter_by_month(all, label),
        None => all,
    };
    appointments.sort_by_key(|a| (a.date, a.start_time));

    let invoice = aggregate(&appointments, catalog);
    let appointments: Vec<PricedAppointment> = appointments
        .into_iter()
        .map(|appointment| {
            let price = resolve_price(&appointment, catalog);
            PricedAppointment { appointment, price }
        })
        .collect();

    debug!(
        appointments = appointments.len(),
        invoice_lines = invoice.lines.len(),
        "schedule pass complete"
    );

    ScheduleRun {
        appointments,
        invoice,
        months,
    }
}
