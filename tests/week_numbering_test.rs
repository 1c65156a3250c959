// ==========================================
// Global week numbering tests
// ==========================================
// Year-wide properties of the month labeling: continuity, January
// reset, override behavior. Pure, no database involved.
// ==========================================

use lpa_audit::engine::{
    count_weeks_in_month, global_week_numbers_for_month, local_weeks_in_month,
};

#[test]
fn test_january_starts_at_one_for_a_decade() {
    for year in 2020..=2030 {
        let weeks = global_week_numbers_for_month(0, year, None);
        assert_eq!(weeks[0], 1, "year {}", year);
    }
}

#[test]
fn test_consecutive_months_continue_without_gap_or_overlap() {
    for year in 2020..=2030 {
        for month0 in 0..11 {
            let this = global_week_numbers_for_month(month0, year, None);
            let next = global_week_numbers_for_month(month0 + 1, year, None);
            assert_eq!(
                next[0],
                *this.last().unwrap() + 1,
                "year {} month {}",
                year,
                month0
            );
        }
    }
}

#[test]
fn test_month_labels_are_strictly_ascending() {
    for month0 in 0..12 {
        let weeks = global_week_numbers_for_month(month0, 2026, None);
        assert!(weeks.windows(2).all(|w| w[1] == w[0] + 1));
    }
}

#[test]
fn test_each_month_has_4_to_6_weeks() {
    for year in 2020..=2030 {
        for month0 in 0..12 {
            let count = count_weeks_in_month(year, month0);
            assert!((4..=6).contains(&count), "year {} month {}", year, month0);
            assert_eq!(local_weeks_in_month(year, month0).len() as u32, count);
        }
    }
}

#[test]
fn test_local_weeks_start_at_one() {
    for month0 in 0..12 {
        assert_eq!(local_weeks_in_month(2026, month0)[0], 1);
    }
}

#[test]
fn test_override_shifts_every_label_by_the_same_delta() {
    let baseline = global_week_numbers_for_month(7, 2026, None);
    let pinned = global_week_numbers_for_month(7, 2026, Some(40));

    assert_eq!(pinned[0], 40);
    assert_eq!(pinned.len(), baseline.len());
    for (p, b) in pinned.iter().zip(&baseline) {
        assert_eq!(p - pinned[0], b - baseline[0]);
    }
}

#[test]
fn test_numbering_is_deterministic() {
    assert_eq!(
        global_week_numbers_for_month(4, 2027, None),
        global_week_numbers_for_month(4, 2027, None)
    );
}
