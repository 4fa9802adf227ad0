//! Per-tier rate tables for the staff pay and customer price views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use petsched_catalog::RateCatalog;
use petsched_core::{Tier, format_minutes_text};

use crate::resolver::{customer_price, staff_hourly_rate};

/// One display row of a tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRateRow {
    pub service_type: String,
    pub number_of_pets: String,
    pub charge_block: String,
    pub amount: Decimal,
}

/// Customer price per active rate row at the given tier, sorted by
/// (service type, pet count). Rates whose service type is missing from the
/// join are labelled "Unknown".
pub fn price_table(catalog: &RateCatalog, tier: Tier) -> Vec<TierRateRow> {
    table(catalog, |rate| customer_price(rate, tier))
}

/// Staff hourly pay per active rate row at the given tier, sorted by
/// (service type, pet count).
pub fn pay_table(catalog: &RateCatalog, tier: Tier) -> Vec<TierRateRow> {
    table(catalog, |rate| staff_hourly_rate(rate, tier))
}

fn table(
    catalog: &RateCatalog,
    amount: impl Fn(&petsched_catalog::ServiceRateRecord) -> Decimal,
) -> Vec<TierRateRow> {
    let mut rows: Vec<TierRateRow> = catalog
        .joined()
        .map(|joined| TierRateRow {
            service_type: joined.service_type_name.unwrap_or("Unknown").to_string(),
            number_of_pets: joined.rate.number_of_pets.as_str().to_string(),
            charge_block: format_minutes_text(&joined.rate.charge_block_duration),
            amount: amount(joined.rate),
        })
        .collect();
    rows.sort_by(|a, b| {
        (a.service_type.as_str(), a.number_of_pets.as_str())
            .cmp(&(b.service_type.as_str(), b.number_of_pets.as_str()))
    });
    rows
}
