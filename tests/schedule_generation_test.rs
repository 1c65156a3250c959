// ==========================================
// Schedule generation end-to-end tests
// ==========================================
// Generation over a real temporary database: week labeling, month
// scoping, mandatory checklist creation and degraded catalogs.
// ==========================================


use std::collections::{HashMap, HashSet};

use lpa_audit::engine::{global_week_numbers_for_month, CHECKLIST_TYPES};
use test_helpers::{create_test_state, register_default_catalogs};

#[test]
fn test_generated_entries_carry_global_week_numbers() {
    let (_tmp, state) = create_test_state();
    register_default_catalogs(&state);

    // June 2026 (month index 5)
    let entries = state
        .schedule_api
        .generate_month(5, 2026, None)
        .expect("generate");
    assert!(!entries.is_empty());

    let expected: HashSet<u32> = global_week_numbers_for_month(5, 2026, None)
        .into_iter()
        .collect();
    let actual: HashSet<u32> = entries.iter().map(|e| e.week_number).collect();
    assert_eq!(actual, expected);

    // 25 entries per week with the full catalog
    let mut per_week: HashMap<u32, usize> = HashMap::new();
    for entry in &entries {
        *per_week.entry(entry.week_number).or_insert(0) += 1;
    }
    assert!(per_week.values().all(|&count| count == 25));
}

#[test]
fn test_generating_february_leaves_january_untouched() {
    let (_tmp, state) = create_test_state();
    register_default_catalogs(&state);

    let january = state
        .schedule_api
        .generate_month(0, 2026, None)
        .expect("generate january");
    state
        .schedule_api
        .generate_month(1, 2026, None)
        .expect("generate february");

    let january_after = state.schedule_api.list_month(0, 2026).expect("list");
    assert_eq!(january_after.len(), january.len());
    let ids_before: HashSet<&str> = january.iter().map(|e| e.id.as_str()).collect();
    let ids_after: HashSet<&str> = january_after.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids_before, ids_after);
}

#[test]
fn test_regeneration_replaces_only_the_target_month() {
    let (_tmp, state) = create_test_state();
    register_default_catalogs(&state);

    state
        .schedule_api
        .generate_month(2, 2026, None)
        .expect("generate march");
    let first = state
        .schedule_api
        .generate_month(3, 2026, None)
        .expect("generate april");
    let second = state
        .schedule_api
        .generate_month(3, 2026, None)
        .expect("regenerate april");

    // regeneration swaps April's ids, March keeps its entries
    let first_ids: HashSet<&str> = first.iter().map(|e| e.id.as_str()).collect();
    let second_ids: HashSet<&str> = second.iter().map(|e| e.id.as_str()).collect();
    assert!(first_ids.is_disjoint(&second_ids));
    assert_eq!(second.len(), first.len());

    let march = state.schedule_api.list_month(2, 2026).expect("list march");
    assert!(!march.is_empty());
    let april = state.schedule_api.list_month(3, 2026).expect("list april");
    assert_eq!(april.len(), second.len());
}

#[test]
fn test_first_week_override_pins_the_month_labels() {
    let (_tmp, state) = create_test_state();
    register_default_catalogs(&state);

    let entries = state
        .schedule_api
        .generate_month(0, 2027, Some(53))
        .expect("generate");

    let min_week = entries.iter().map(|e| e.week_number).min().expect("weeks");
    assert_eq!(min_week, 53);
}

#[test]
fn test_empty_sector_catalog_generates_and_persists_nothing() {
    let (_tmp, state) = create_test_state();
    // employees only, no sectors
    for employee in lpa_audit::app::seed::default_employees() {
        state.employee_repo.insert(&employee).expect("insert");
    }

    let entries = state
        .schedule_api
        .generate_month(5, 2026, None)
        .expect("generate");
    assert!(entries.is_empty());
    assert!(state
        .schedule_api
        .list_month(5, 2026)
        .expect("list")
        .is_empty());
}

#[test]
fn test_generation_creates_the_six_mandatory_checklists() {
    let (_tmp, state) = create_test_state();
    for sector in lpa_audit::app::seed::default_sectors() {
        state.sector_repo.insert(&sector).expect("insert");
    }

    state
        .schedule_api
        .generate_month(5, 2026, None)
        .expect("generate");

    let checklists = state.checklist_repo.list().expect("list");
    for type_name in CHECKLIST_TYPES {
        assert!(
            checklists.iter().any(|c| c.name == type_name),
            "missing mandatory checklist: {}",
            type_name
        );
    }
}

#[test]
fn test_existing_checklists_survive_regeneration() {
    let (_tmp, state) = create_test_state();
    register_default_catalogs(&state);

    let before = state.checklist_repo.list().expect("list").len();
    state
        .schedule_api
        .generate_month(5, 2026, None)
        .expect("generate");
    state
        .schedule_api
        .generate_month(5, 2026, None)
        .expect("regenerate");

    // only the 6 mandatory ones were added, once
    let after = state.checklist_repo.list().expect("list").len();
    assert_eq!(after, before + CHECKLIST_TYPES.len());
}

#[test]
fn test_month_index_out_of_range_is_rejected() {
    let (_tmp, state) = create_test_state();
    assert!(state.schedule_api.generate_month(12, 2026, None).is_err());
    assert!(state.schedule_api.list_month(12, 2026).is_err());
}

#[test]
fn test_clean_old_entries_drops_earlier_months_only() {
    let (_tmp, state) = create_test_state();
    register_default_catalogs(&state);

    state
        .schedule_api
        .generate_month(10, 2025, None)
        .expect("generate nov 2025");
    state
        .schedule_api
        .generate_month(0, 2026, None)
        .expect("generate jan 2026");
    state
        .schedule_api
        .generate_month(1, 2026, None)
        .expect("generate feb 2026");

    let removed = state.schedule_api.clean_old_entries(1, 2026).expect("clean");
    assert!(removed > 0);

    assert!(state
        .schedule_api
        .list_month(10, 2025)
        .expect("list")
        .is_empty());
    assert!(state
        .schedule_api
        .list_month(0, 2026)
        .expect("list")
        .is_empty());
    assert!(!state
        .schedule_api
        .list_month(1, 2026)
        .expect("list")
        .is_empty());
}
