//! Human-readable duration rendering.

use crate::coerce;

/// Render a minute count as a days/hours/minutes composite.
///
/// Only non-zero components are emitted, space-joined, with singular/plural
/// units: `90` → "1 hour 30 minutes", `1440` → "1 day", `0` → "0 minutes".
pub fn format_minutes(minutes: i64) -> String {
    if minutes == 0 {
        return "0 minutes".to_string();
    }

    let days = minutes / 1440;
    let hours = (minutes % 1440) / 60;
    let mins = minutes % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day{}", days, if days == 1 { "" } else { "s" }));
    }
    if hours > 0 {
        parts.push(format!(
            "{} hour{}",
            hours,
            if hours == 1 { "" } else { "s" }
        ));
    }
    if mins > 0 {
        parts.push(format!(
            "{} minute{}",
            mins,
            if mins == 1 { "" } else { "s" }
        ));
    }

    if parts.is_empty() {
        return "0 minutes".to_string();
    }
    parts.join(" ")
}

/// Render a raw catalog duration field.
///
/// Non-numeric text is returned unchanged rather than erroring, since the
/// tier rate tables display whatever the storage layer holds.
pub fn format_minutes_text(raw: &str) -> String {
    match coerce::parse_minutes(raw) {
        Some(minutes) => format_minutes(minutes),
        None => raw.to_string(),
    }
}
