// ==========================================
// Distribution engine tests
// ==========================================
// The weekly distribution invariants, exercised without a database:
// pattern coverage, auditor rotation, checklist rotation.
// ==========================================

use std::collections::HashSet;

use lpa_audit::domain::{Employee, Sector};
use lpa_audit::engine::{
    normalize_checklist_id, sectors_for_week, AuditDistributor, CANONICAL_SECTOR_NAMES,
    CHECKLIST_TYPES,
};

// ==========================================
// Fixtures
// ==========================================

fn full_catalog() -> Vec<Sector> {
    CANONICAL_SECTOR_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Sector {
            id: format!("sec{}", i + 1),
            name: (*name).to_string(),
            checklist_id: format!("ck{}", i + 1),
        })
        .collect()
}

fn roster(n: usize) -> Vec<Employee> {
    (1..=n)
        .map(|i| Employee {
            id: format!("emp{}", i),
            name: format!("Auditor {}", i),
            role: "Auditor".to_string(),
            sector: "Qualidade".to_string(),
        })
        .collect()
}

// ==========================================
// Weekly coverage
// ==========================================

#[test]
fn test_full_catalog_week_produces_25_assignments() {
    let distributor = AuditDistributor::new(roster(8), full_catalog());
    let assignments = distributor.distribute_for_week(1, 2026);
    assert_eq!(assignments.len(), 25);
}

#[test]
fn test_week_covers_5_distinct_sectors_each_over_days_1_to_5() {
    let distributor = AuditDistributor::new(roster(8), full_catalog());
    let assignments = distributor.distribute_for_week(1, 2026);

    let sector_ids: HashSet<&str> = assignments.iter().map(|a| a.sector_id.as_str()).collect();
    assert_eq!(sector_ids.len(), 5);

    for sector_id in sector_ids {
        let days: HashSet<u32> = assignments
            .iter()
            .filter(|a| a.sector_id == sector_id)
            .map(|a| a.day)
            .collect();
        assert_eq!(days, HashSet::from([1, 2, 3, 4, 5]));
    }
}

#[test]
fn test_consecutive_weeks_pick_different_sector_sets() {
    let catalog = full_catalog();
    let week1: Vec<String> = sectors_for_week(1, &catalog)
        .into_iter()
        .map(|s| s.id)
        .collect();
    let week2: Vec<String> = sectors_for_week(2, &catalog)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_ne!(week1, week2);
}

#[test]
fn test_every_sector_is_audited_within_a_4_week_cycle() {
    let catalog = full_catalog();
    let mut seen = HashSet::new();
    for week in 1..=4 {
        for sector in sectors_for_week(week, &catalog) {
            seen.insert(sector.id);
        }
    }
    assert_eq!(seen.len(), 8);
}

// ==========================================
// Auditor rotation
// ==========================================

#[test]
fn test_small_roster_appears_fully_in_one_week() {
    let distributor = AuditDistributor::new(roster(4), full_catalog());
    let assignments = distributor.distribute_for_week(1, 2026);

    let used: HashSet<&str> = assignments.iter().map(|a| a.employee_id.as_str()).collect();
    assert_eq!(used, HashSet::from(["emp1", "emp2", "emp3", "emp4"]));
}

#[test]
fn test_large_roster_never_repeats_an_auditor_on_one_day() {
    let distributor = AuditDistributor::new(roster(8), full_catalog());
    let assignments = distributor.distribute_for_week(3, 2026);

    for day in 1..=5 {
        let ids: Vec<&str> = assignments
            .iter()
            .filter(|a| a.day == day)
            .map(|a| a.employee_id.as_str())
            .collect();
        let distinct: HashSet<&&str> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len());
    }
}

#[test]
fn test_assignment_names_match_the_roster() {
    let distributor = AuditDistributor::new(vec![], full_catalog());
    let assignments = distributor.distribute_for_week(1, 2026);

    // empty roster uses the mock auditors
    for assignment in &assignments {
        assert!(assignment.employee_id.starts_with("emp-mock-"));
        assert!(!assignment.employee_name.is_empty());
    }
}

// ==========================================
// Checklist rotation
// ==========================================

#[test]
fn test_an_auditor_never_repeats_a_checklist_type_within_6_draws() {
    let distributor = AuditDistributor::new(roster(8), full_catalog());
    let assignments = distributor.distribute_for_week(1, 2026);

    for employee in distributor.employees() {
        let drawn: Vec<&str> = assignments
            .iter()
            .filter(|a| a.employee_id == employee.id)
            .map(|a| a.checklist_id.as_str())
            .collect();

        // with 8 auditors nobody draws more than 6 types in a week
        assert!(drawn.len() <= CHECKLIST_TYPES.len());
        let distinct: HashSet<&&str> = drawn.iter().collect();
        assert_eq!(distinct.len(), drawn.len());
    }
}

#[test]
fn test_checklist_ids_use_the_shared_normalization_rule() {
    let distributor = AuditDistributor::new(roster(2), full_catalog());
    let assignments = distributor.distribute_for_week(1, 2026);

    let valid: HashSet<String> = CHECKLIST_TYPES
        .iter()
        .map(|t| normalize_checklist_id(t))
        .collect();
    for assignment in &assignments {
        assert!(valid.contains(&assignment.checklist_id));
        assert!(assignment.checklist_name.starts_with("Auditoria "));
    }
}

// ==========================================
// Degraded catalogs
// ==========================================

#[test]
fn test_partial_catalog_yields_proportionally_fewer_assignments() {
    let mut catalog = full_catalog();
    catalog.retain(|s| s.name != "Brochadeira" && s.name != "Chanfradeira");

    // week 1 names both missing sectors
    let distributor = AuditDistributor::new(roster(8), catalog);
    let assignments = distributor.distribute_for_week(1, 2026);
    assert_eq!(assignments.len(), 15);
}

#[test]
fn test_week_5_differs_from_week_4() {
    let catalog = full_catalog();
    let week4: Vec<String> = sectors_for_week(4, &catalog)
        .into_iter()
        .map(|s| s.id)
        .collect();
    let week5: Vec<String> = sectors_for_week(5, &catalog)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_ne!(week4, week5);
    assert_eq!(week5.len(), 5);
}
