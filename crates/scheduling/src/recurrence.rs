//! Recurrence rules and date expansion.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use petsched_core::{DomainError, DomainResult};

/// How often a recurring section repeats.
///
/// `Month` and `Year` step by fixed 30/365-day intervals rather than true
/// calendar arithmetic. Known accuracy limitation: downstream invoice totals
/// depend on exactly which dates come out, so changing the stepping is a
/// behavior change, not a fix.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl core::str::FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(DomainError::validation(format!(
                "unknown recurrence frequency: {other:?}"
            ))),
        }
    }
}

impl core::fmt::Display for Frequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        };
        f.write_str(label)
    }
}

/// A section's recurrence settings.
///
/// `end_date` defaults to the section's start date during materialization
/// when unset; `days_of_week` is only meaningful for weekly recurrence but
/// filters the other frequencies too when supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default = "default_every")]
    pub every: u32,
    #[serde(default)]
    pub days_of_week: Vec<Weekday>,
}

fn default_every() -> u32 {
    1
}

impl Default for RecurrenceRule {
    /// Weekly, every week, no selected days, no end date.
    fn default() -> Self {
        Self {
            end_date: None,
            frequency: Frequency::default(),
            every: default_every(),
            days_of_week: Vec::new(),
        }
    }
}

impl RecurrenceRule {
    /// Validated constructor for programmatic callers.
    pub fn new(
        end_date: Option<NaiveDate>,
        frequency: Frequency,
        every: u32,
        days_of_week: Vec<Weekday>,
    ) -> DomainResult<Self> {
        if every < 1 {
            return Err(DomainError::invariant(
                "recurrence interval must be at least 1",
            ));
        }
        Ok(Self {
            end_date,
            frequency,
            every,
            days_of_week,
        })
    }
}

/// Add calendar months with day-of-month clamping
/// (Jan 31 + 1 month → Feb 28, or Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Default recurrence end: one calendar month after the start date.
pub fn default_recurrence_end(start: NaiveDate) -> NaiveDate {
    add_months(start, 1)
}

/// Expand a recurrence rule into concrete dates, ascending, no duplicates.
///
/// Weekly recurrence walks calendar weeks from the Monday of `start`'s week:
/// week `i` (week 0 first) is included iff `i % every == 0`, and within an
/// included week every selected weekday inside `[start, end]` is emitted
/// (the selected days need not match `start`'s own weekday). Other frequencies
/// step from `start` by `every` days (or the fixed 30/365-day month/year
/// approximation), filtered by `days_of_week` when it is non-empty.
///
/// `start > end` yields an empty sequence.
pub fn generate(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    every: u32,
    days_of_week: &[Weekday],
) -> Vec<NaiveDate> {
    let every = i64::from(every.max(1));
    let mut dates = Vec::new();

    match frequency {
        Frequency::Week => {
            let mut week_start =
                start - Duration::days(i64::from(start.weekday().num_days_from_monday()));
            let mut week_index: i64 = 0;
            loop {
                if week_index % every == 0 {
                    for day in days_of_week {
                        let date =
                            week_start + Duration::days(i64::from(day.num_days_from_monday()));
                        if date >= start && date <= end {
                            dates.push(date);
                        }
                    }
                }
                week_start += Duration::days(7);
                week_index += 1;
                if week_start > end {
                    break;
                }
            }
        }
        Frequency::Day => collect_stepped(start, end, every, days_of_week, &mut dates),
        Frequency::Month => collect_stepped(start, end, 30 * every, days_of_week, &mut dates),
        Frequency::Year => collect_stepped(start, end, 365 * every, days_of_week, &mut dates),
    }

    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Fixed-step expansion shared by daily recurrence and the month/year
/// approximations.
fn collect_stepped(
    start: NaiveDate,
    end: NaiveDate,
    step_days: i64,
    days_of_week: &[Weekday],
    dates: &mut Vec<NaiveDate>,
) {
    let mut current = start;
    while current <= end {
        if days_of_week.is_empty() || days_of_week.contains(&current.weekday()) {
            dates.push(current);
        }
        current += Duration::days(step_days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_emits_all_selected_days_in_range() {
        // start is Monday 2025-11-03; the matching Wednesday of week 0 is
        // in range, nothing before the start leaks in.
        let dates = generate(
            date(2025, 11, 3),
            date(2025, 11, 16),
            Frequency::Week,
            1,
            &[Weekday::Mon, Weekday::Wed],
        );
        assert_eq!(
            dates,
            vec![
                date(2025, 11, 3),
                date(2025, 11, 5),
                date(2025, 11, 10),
                date(2025, 11, 12),
            ]
        );
    }

    #[test]
    fn weekly_clips_days_before_start() {
        // start mid-week on a Wednesday: Monday of week 0 is out of range.
        let dates = generate(
            date(2025, 11, 5),
            date(2025, 11, 11),
            Frequency::Week,
            1,
            &[Weekday::Mon, Weekday::Wed],
        );
        assert_eq!(dates, vec![date(2025, 11, 5), date(2025, 11, 10)]);
    }

    #[test]
    fn every_second_week_skips_odd_weeks() {
        let dates = generate(
            date(2025, 11, 3),
            date(2025, 11, 30),
            Frequency::Week,
            2,
            &[Weekday::Mon, Weekday::Wed],
        );
        // weeks 0 and 2 only
        assert_eq!(
            dates,
            vec![
                date(2025, 11, 3),
                date(2025, 11, 5),
                date(2025, 11, 17),
                date(2025, 11, 19),
            ]
        );
    }

    #[test]
    fn weekly_output_is_sorted_despite_day_order() {
        let dates = generate(
            date(2025, 11, 3),
            date(2025, 11, 9),
            Frequency::Week,
            1,
            &[Weekday::Fri, Weekday::Mon],
        );
        assert_eq!(dates, vec![date(2025, 11, 3), date(2025, 11, 7)]);
    }

    #[test]
    fn daily_steps_by_every() {
        let dates = generate(
            date(2025, 11, 1),
            date(2025, 11, 7),
            Frequency::Day,
            3,
            &[],
        );
        assert_eq!(
            dates,
            vec![date(2025, 11, 1), date(2025, 11, 4), date(2025, 11, 7)]
        );
    }

    #[test]
    fn daily_honors_weekday_filter_when_present() {
        // Nov 1 2025 is a Saturday.
        let dates = generate(
            date(2025, 11, 1),
            date(2025, 11, 7),
            Frequency::Day,
            1,
            &[Weekday::Mon],
        );
        assert_eq!(dates, vec![date(2025, 11, 3)]);
    }

    #[test]
    fn monthly_is_a_thirty_day_step() {
        let dates = generate(
            date(2025, 1, 15),
            date(2025, 3, 31),
            Frequency::Month,
            1,
            &[],
        );
        assert_eq!(
            dates,
            vec![date(2025, 1, 15), date(2025, 2, 14), date(2025, 3, 16)]
        );
    }

    #[test]
    fn yearly_is_a_365_day_step() {
        let dates = generate(
            date(2025, 6, 1),
            date(2027, 6, 1),
            Frequency::Year,
            1,
            &[],
        );
        // no leap day falls inside either step, so both land on June 1
        assert_eq!(
            dates,
            vec![date(2025, 6, 1), date(2026, 6, 1), date(2027, 6, 1)]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(
            generate(
                date(2025, 11, 10),
                date(2025, 11, 3),
                Frequency::Week,
                1,
                &[Weekday::Mon],
            )
            .is_empty()
        );
        assert!(
            generate(
                date(2025, 11, 10),
                date(2025, 11, 3),
                Frequency::Day,
                1,
                &[],
            )
            .is_empty()
        );
    }

    #[test]
    fn month_add_clamps_to_short_months() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 3, 31), 1), date(2025, 4, 30));
        assert_eq!(add_months(date(2025, 12, 15), 1), date(2026, 1, 15));
    }

    #[test]
    fn default_end_is_one_month_out() {
        assert_eq!(default_recurrence_end(date(2025, 11, 3)), date(2025, 12, 3));
    }

    #[test]
    fn rule_constructor_rejects_zero_interval() {
        assert!(RecurrenceRule::new(None, Frequency::Week, 0, vec![]).is_err());
        assert!(RecurrenceRule::new(None, Frequency::Week, 1, vec![]).is_ok());
    }

    #[test]
    fn frequency_labels_round_trip() {
        for frequency in [
            Frequency::Day,
            Frequency::Week,
            Frequency::Month,
            Frequency::Year,
        ] {
            assert_eq!(
                frequency.to_string().parse::<Frequency>().unwrap(),
                frequency
            );
        }
        assert!("fortnight".parse::<Frequency>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        /// Property: every generated date is inside the range, sorted,
        /// distinct, and on a selected weekday.
        #[test]
        fn weekly_dates_are_in_range_sorted_and_on_selected_days(
            start_offset in 0i64..3650,
            span in 0i64..120,
            every in 1u32..5,
            day_bits in 1u8..128,
        ) {
            let start = date(2024, 1, 1) + Duration::days(start_offset);
            let end = start + Duration::days(span);
            let all_days = [
                Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
                Weekday::Fri, Weekday::Sat, Weekday::Sun,
            ];
            let days: Vec<Weekday> = all_days
                .iter()
                .enumerate()
                .filter(|(i, _)| day_bits & (1 << i) != 0)
                .map(|(_, d)| *d)
                .collect();

            let dates = generate(start, end, Frequency::Week, every, &days);
            for window in dates.windows(2) {
                prop_assert!(window[0] < window[1]);
            }
            for d in &dates {
                prop_assert!(*d >= start && *d <= end);
                prop_assert!(days.contains(&d.weekday()));
            }
        }

        /// Property: weekly with every=1 and all seven days selected emits
        /// exactly the full range.
        #[test]
        fn weekly_all_days_every_week_is_the_full_range(
            start_offset in 0i64..3650,
            span in 0i64..60,
        ) {
            let start = date(2024, 1, 1) + Duration::days(start_offset);
            let end = start + Duration::days(span);
            let days = vec![
                Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
                Weekday::Fri, Weekday::Sat, Weekday::Sun,
            ];
            let dates = generate(start, end, Frequency::Week, 1, &days);
            prop_assert_eq!(dates.len() as i64, span + 1);
        }

        /// Property: month-add preserves the day when the target month has
        /// room for it.
        #[test]
        fn add_months_preserves_day_when_possible(
            start_offset in 0i64..3650,
            months in 0u32..36,
        ) {
            let start = date(2024, 1, 1) + Duration::days(start_offset);
            let result = add_months(start, months);
            prop_assert!(result.day() <= start.day());
            if start.day() <= 28 {
                prop_assert_eq!(result.day(), start.day());
            }
        }
    }
}
