//! `petsched-invoicing` — folding priced appointments into invoice lines.

pub mod invoice;

pub use invoice::{InvoiceLine, InvoiceSummary, aggregate};
