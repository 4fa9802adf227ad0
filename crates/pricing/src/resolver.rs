//! Appointment → rate row matching and tier-adjusted amounts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use petsched_catalog::{JoinedRate, RateCatalog, ServiceRateRecord};
use petsched_core::Tier;
use petsched_scheduling::Appointment;

const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Find the catalog row that prices an appointment.
///
/// First match wins, in catalog order:
/// 1. active rows whose joined service-type name equals the appointment's
///    and whose raw charge-block text equals the duration's decimal string
///    ("60" matches duration 60; "60.0" does not); end-time-based
///    appointments have no duration and never match;
/// 2. within those, an exact trimmed/case-insensitive pet-count text match;
/// 3. failing that, equality of the extracted pet-count cardinals.
///
/// No further fallback: an unverified pet-count match would silently
/// misprice, so `None` it is.
pub fn match_rate<'a>(
    appointment: &Appointment,
    catalog: &'a RateCatalog,
) -> Option<JoinedRate<'a>> {
    let minutes = appointment.duration_minutes()?;
    let wanted_block = minutes.to_string();

    let candidates: Vec<JoinedRate<'a>> = catalog
        .joined()
        .filter(|joined| {
            joined.service_type_name == Some(appointment.service_type.as_str())
                && joined.rate.charge_block_duration.trim() == wanted_block
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let wanted_pets = appointment.number_of_pets.normalized();
    if let Some(exact) = candidates
        .iter()
        .find(|joined| joined.rate.number_of_pets.normalized() == wanted_pets)
    {
        return Some(exact.clone());
    }

    let wanted_cardinal = appointment.number_of_pets.cardinal();
    candidates
        .into_iter()
        .find(|joined| joined.rate.number_of_pets.cardinal() == wanted_cardinal)
}

/// Customer price for a matched rate row: recommended rate plus the tier
/// adjustment. A non-numeric rate field prices at zero rather than failing
/// the batch.
pub fn customer_price(rate: &ServiceRateRecord, tier: Tier) -> Decimal {
    match rate.customer_rate() {
        Some(base) => base + tier.adjustment(),
        None => {
            warn!(rate = %rate.id, "non-numeric customer rate, pricing at zero");
            Decimal::ZERO
        }
    }
}

/// Staff pay rate per hour for a matched rate row.
///
/// The recommended staff rate covers one charge block (minutes), so the
/// hourly rate is `rate / block * 60` plus the tier adjustment. A zero or
/// missing block skips the conversion and uses the raw rate.
pub fn staff_hourly_rate(rate: &ServiceRateRecord, tier: Tier) -> Decimal {
    let Some(base) = rate.staff_rate() else {
        warn!(rate = %rate.id, "non-numeric staff rate, paying at zero");
        return Decimal::ZERO;
    };
    // multiply before dividing so whole-cent rates stay exact
    let per_hour = match rate.charge_block_minutes() {
        Some(block) if block > 0 => base * MINUTES_PER_HOUR / Decimal::from(block),
        _ => base,
    };
    per_hour + tier.adjustment()
}

/// Resolve an appointment's customer price.
///
/// `None` means "no catalog row matches", deliberately distinct from
/// `Some(0)`, which means a row matched but its rate was unusable.
pub fn resolve_price(appointment: &Appointment, catalog: &RateCatalog) -> Option<Decimal> {
    let joined = match_rate(appointment, catalog)?;
    Some(customer_price(joined.rate, appointment.price_tier))
}
