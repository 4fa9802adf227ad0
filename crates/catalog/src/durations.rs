//! Duration options offered by a service type.

use std::collections::BTreeSet;

use tracing::debug;

use petsched_core::ServiceTypeId;

use crate::catalog::RateCatalog;

/// Practical cap substituted for an unlimited (`max_duration == 0`) range.
const UNLIMITED_CAP_MINUTES: i64 = 1440;

/// Valid duration choices (minutes, ascending, distinct) for a service type.
///
/// Each active matching rate row contributes the arithmetic progression
/// `min, min+g, … ≤ max`; `min` itself is always included even when it sits
/// off another row's granularity grid. Rows with non-numeric duration fields
/// are skipped without aborting the computation, and an unknown or rate-less
/// service type yields no options.
pub fn duration_options(catalog: &RateCatalog, service_type_id: &ServiceTypeId) -> Vec<i64> {
    let mut options: BTreeSet<i64> = BTreeSet::new();

    for rate in catalog
        .active_rates()
        .filter(|r| r.service_type_id == *service_type_id)
    {
        let (Some(min), Some(granularity), Some(max)) = (
            rate.min_duration_minutes(),
            rate.granularity_minutes(),
            rate.max_duration_minutes(),
        ) else {
            debug!(rate = %rate.id, "skipping rate row with non-numeric duration fields");
            continue;
        };

        let granularity = granularity.max(1);
        let max = if max == 0 { UNLIMITED_CAP_MINUTES } else { max };

        let mut current = min;
        while current <= max {
            options.insert(current);
            current += granularity;
        }
        options.insert(min);
    }

    options.into_iter().collect()
}
