// ==========================================
// LPA Audit System - Global week numbering
// ==========================================
// Pure date arithmetic. Months are 0-based (January = 0) and the
// global count resets every January, accumulating through December
// so week labels never collide across month boundaries.
// ==========================================

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Local week of the month for a date
///
/// Defined as ceil((day_of_month + first_weekday_offset) / 7) where
/// first_weekday_offset is the 0-based from-Sunday weekday of the 1st
/// of that month. Usually 1-5; a 31-day month starting on a Friday or
/// Saturday reaches 6, which the sector pattern treats as a plain
/// cycle week.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let offset = first_weekday_offset(date.year(), date.month0());
    (date.day() + offset).div_ceil(7)
}

/// 0-based from-Sunday weekday of the first day of a month
fn first_weekday_offset(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Last calendar day of a month (0-based month index)
fn last_day_of_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 >= 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Number of distinct local week numbers touched by a month's days
///
/// Typically 4 or 5. Pure: no side effects, identical inputs yield
/// identical results.
pub fn count_weeks_in_month(year: i32, month0: u32) -> u32 {
    local_weeks_in_month(year, month0).len() as u32
}

/// Ascending distinct local week numbers of a month (1..=4 or 1..=5)
pub fn local_weeks_in_month(year: i32, month0: u32) -> Vec<u32> {
    let mut weeks = BTreeSet::new();
    for day in 1..=last_day_of_month(year, month0) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, day) {
            weeks.insert(week_of_month(date));
        }
    }
    weeks.into_iter().collect()
}

/// Global week numbers covering a month, ascending and without
/// duplicates
///
/// Baseline: the month's first local week gets 1 plus the sum of
/// `count_weeks_in_month` over every earlier month of the same year,
/// so January always starts at 1. With `first_week_override` the
/// caller pins where the month's numbering starts (e.g. continuing a
/// sequence begun in a prior year); later local weeks are offset by
/// their local-week-minus-1 delta either way.
pub fn global_week_numbers_for_month(
    month0: u32,
    year: i32,
    first_week_override: Option<u32>,
) -> Vec<u32> {
    let base = first_week_override.unwrap_or_else(|| base_week_for_month(month0, year));
    local_weeks_in_month(year, month0)
        .into_iter()
        .map(|local| base + (local - 1))
        .collect()
}

/// Baseline global number of a month's first local week
pub fn base_week_for_month(month0: u32, year: i32) -> u32 {
    let offset: u32 = (0..month0).map(|m| count_weeks_in_month(year, m)).sum();
    offset + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month0: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap()
    }

    #[test]
    fn test_week_of_month_formula() {
        // September 2024 starts on a Sunday (offset 0)
        assert_eq!(week_of_month(date(2024, 8, 1)), 1);
        assert_eq!(week_of_month(date(2024, 8, 7)), 1);
        assert_eq!(week_of_month(date(2024, 8, 8)), 2);
        assert_eq!(week_of_month(date(2024, 8, 30)), 5);

        // March 2024 starts on a Friday (offset 5)
        assert_eq!(week_of_month(date(2024, 2, 1)), 1);
        assert_eq!(week_of_month(date(2024, 2, 2)), 1);
        assert_eq!(week_of_month(date(2024, 2, 3)), 2);
        assert_eq!(week_of_month(date(2024, 2, 31)), 6);
    }

    #[test]
    fn test_count_weeks_typical_months() {
        // February 2026 starts on a Sunday and has 28 days: 4 weeks
        assert_eq!(count_weeks_in_month(2026, 1), 4);
        // January 2026 starts on a Thursday: 5 weeks
        assert_eq!(count_weeks_in_month(2026, 0), 5);
    }

    #[test]
    fn test_count_weeks_is_pure() {
        assert_eq!(count_weeks_in_month(2024, 6), count_weeks_in_month(2024, 6));
        assert_eq!(
            global_week_numbers_for_month(6, 2024, None),
            global_week_numbers_for_month(6, 2024, None)
        );
    }

    #[test]
    fn test_january_always_starts_at_one() {
        for year in [2023, 2024, 2025, 2026, 2030] {
            assert_eq!(global_week_numbers_for_month(0, year, None)[0], 1);
        }
    }

    #[test]
    fn test_months_chain_without_gaps() {
        for year in [2024, 2026] {
            for month0 in 0..11 {
                let this = global_week_numbers_for_month(month0, year, None);
                let next = global_week_numbers_for_month(month0 + 1, year, None);
                assert_eq!(next[0], this[this.len() - 1] + 1);
            }
        }
    }

    #[test]
    fn test_no_duplicate_week_numbers() {
        for month0 in 0..12 {
            let weeks = global_week_numbers_for_month(month0, 2026, None);
            let mut deduped = weeks.clone();
            deduped.dedup();
            assert_eq!(weeks, deduped);
        }
    }

    #[test]
    fn test_override_pins_the_first_week() {
        let weeks = global_week_numbers_for_month(1, 2026, Some(10));
        assert_eq!(weeks[0], 10);
        let baseline = global_week_numbers_for_month(1, 2026, None);
        assert_eq!(weeks.len(), baseline.len());
    }
}
