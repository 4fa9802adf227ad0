//! Catalog records parsed from storage-layer rows.
//!
//! Every field arrives as text. Booleans are coerced on construction;
//! numeric fields are kept verbatim and coerced through tolerant accessors,
//! so a malformed value poisons only the operations that actually need it
//! (a rate row with an unparsable `min_duration` can still price an
//! appointment whose charge block matches).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use petsched_core::coerce;
use petsched_core::{PetCount, RateId, ServiceTypeId};
use rust_decimal::Decimal;

/// One storage-layer row: field name → text value.
pub type RawRow = HashMap<String, String>;

fn field(row: &RawRow, name: &str) -> String {
    row.get(name).cloned().unwrap_or_default()
}

/// Immutable service-type reference data.
///
/// `uses_end_date` decides whether appointments of this type are
/// duration-based or end-time-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTypeRecord {
    pub id: ServiceTypeId,
    pub name: String,
    pub uses_end_date: bool,
    pub is_active: bool,
}

impl ServiceTypeRecord {
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            id: ServiceTypeId::new(field(row, "id")),
            name: field(row, "name"),
            uses_end_date: coerce::parse_bool(&field(row, "uses_end_date")),
            is_active: coerce::parse_bool(&field(row, "is_active")),
        }
    }
}

/// One rate row: a priced charge block for a service type and pet count.
///
/// Numeric fields stay as raw text; see the module docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRateRecord {
    pub id: RateId,
    pub service_type_id: ServiceTypeId,
    pub number_of_pets: PetCount,
    pub min_duration: String,
    pub max_duration: String,
    pub duration_granularity: String,
    pub charge_block_duration: String,
    pub recommended_staff_rate: String,
    pub recommended_customer_rate: String,
    pub is_active: bool,
}

impl ServiceRateRecord {
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            id: RateId::new(field(row, "id")),
            service_type_id: ServiceTypeId::new(field(row, "service_type_id")),
            number_of_pets: PetCount::new(field(row, "number_of_pets")),
            min_duration: field(row, "min_duration"),
            max_duration: field(row, "max_duration"),
            duration_granularity: field(row, "duration_granularity"),
            charge_block_duration: field(row, "charge_block_duration"),
            recommended_staff_rate: field(row, "recommended_staff_rate"),
            recommended_customer_rate: field(row, "recommended_customer_rate"),
            is_active: coerce::parse_bool(&field(row, "is_active")),
        }
    }

    pub fn min_duration_minutes(&self) -> Option<i64> {
        coerce::parse_minutes(&self.min_duration)
    }

    pub fn max_duration_minutes(&self) -> Option<i64> {
        coerce::parse_minutes(&self.max_duration)
    }

    pub fn granularity_minutes(&self) -> Option<i64> {
        coerce::parse_minutes(&self.duration_granularity)
    }

    pub fn charge_block_minutes(&self) -> Option<i64> {
        coerce::parse_minutes(&self.charge_block_duration)
    }

    pub fn staff_rate(&self) -> Option<Decimal> {
        coerce::parse_rate(&self.recommended_staff_rate)
    }

    pub fn customer_rate(&self) -> Option<Decimal> {
        coerce::parse_rate(&self.recommended_customer_rate)
    }
}
