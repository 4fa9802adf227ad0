//! `petsched-engine` — the full materialize → price → aggregate pass.
//!
//! This is the crate the UI layer calls: hand it the template sections and a
//! freshly-read catalog, get back the priced appointment schedule, the
//! customer invoice and the month filter labels. Each pass owns its derived
//! data, is side-effect free, and is safely re-runnable.

pub mod pass;

pub use pass::{PricedAppointment, ScheduleRun, run, run_for_month};
