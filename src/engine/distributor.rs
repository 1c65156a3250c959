// ==========================================
// LPA Audit System - Audit distribution engine
// ==========================================
// Produces one week of assignments: 5 sectors x 5 weekdays.
// Auditors rotate per weekday without same-day repeats; checklist
// types rotate per auditor without repeats inside the week.
// Rotation state lives in a context created per call, so one week's
// distribution can never leak into the next.
// ==========================================

use std::collections::{HashMap, HashSet};

use crate::domain::{AuditAssignment, Employee, Sector};
use crate::engine::checklist_types::{
    checklist_display_name, normalize_checklist_id, CHECKLIST_TYPES,
};
use crate::engine::sector_pattern::sectors_for_week;

/// Built-in auditor roster used when no employees are registered
pub fn mock_employees() -> Vec<Employee> {
    let roster = [
        ("emp-mock-1", "Diego Lima", "Qualidade"),
        ("emp-mock-2", "Rafael Costa", "Processo"),
        ("emp-mock-3", "Marlon Oliveira", "Produção"),
        ("emp-mock-4", "Carlos Henrique", "Qualidade"),
        ("emp-mock-5", "Aurélio Sousa", "Qualidade"),
        ("emp-mock-6", "Samuel Mendes", "Manutenção"),
        ("emp-mock-7", "Ronaldo Freitas", "Estamparia"),
        ("emp-mock-8", "Mateus Costa", "Qualidade"),
    ];

    roster
        .into_iter()
        .map(|(id, name, sector)| Employee {
            id: id.to_string(),
            name: name.to_string(),
            role: "Auditor".to_string(),
            sector: sector.to_string(),
        })
        .collect()
}

// ==========================================
// RotationState - per-invocation scratch state
// ==========================================
struct RotationState {
    // weekday (1-5) -> auditor ids already used that day
    auditor_used_by_day: HashMap<u32, HashSet<String>>,
    // auditor id -> checklist type labels used this week
    checklist_used_by_auditor: HashMap<String, HashSet<String>>,
}

impl RotationState {
    fn new(employees: &[Employee]) -> Self {
        let mut auditor_used_by_day = HashMap::new();
        for day in 1..=5 {
            auditor_used_by_day.insert(day, HashSet::new());
        }

        let checklist_used_by_auditor = employees
            .iter()
            .map(|e| (e.id.clone(), HashSet::new()))
            .collect();

        Self {
            auditor_used_by_day,
            checklist_used_by_auditor,
        }
    }

    /// Next auditor for a weekday, no repeats on the same day
    ///
    /// Picks the Nth not-yet-used auditor in roster order, N being
    /// how many were already assigned that day. When everyone was
    /// used, the day restarts from the first roster entry - a
    /// deterministic fallback, not a round-robin over survivors.
    fn next_auditor<'a>(&mut self, day: u32, roster: &'a [Employee]) -> &'a Employee {
        let used = self.auditor_used_by_day.entry(day).or_default();

        let available: Vec<&Employee> = roster.iter().filter(|e| !used.contains(&e.id)).collect();

        if available.is_empty() {
            used.clear();
            let selected = &roster[0];
            used.insert(selected.id.clone());
            return selected;
        }

        let selected = available[used.len() % available.len()];
        used.insert(selected.id.clone());
        selected
    }

    /// Next checklist (id, display name) for an auditor
    ///
    /// Same selection rule over the fixed type list; an auditor who
    /// exhausted all six types this week restarts from the first.
    fn next_checklist(&mut self, auditor_id: &str) -> (String, String) {
        let used = self
            .checklist_used_by_auditor
            .entry(auditor_id.to_string())
            .or_default();

        let available: Vec<&str> = CHECKLIST_TYPES
            .iter()
            .copied()
            .filter(|t| !used.contains(*t))
            .collect();

        let type_name = if available.is_empty() {
            used.clear();
            CHECKLIST_TYPES[0]
        } else {
            available[used.len() % available.len()]
        };

        used.insert(type_name.to_string());
        (
            normalize_checklist_id(type_name),
            checklist_display_name(type_name),
        )
    }
}

// ==========================================
// AuditDistributor
// ==========================================

/// Distributes one week of audit assignments over the fixed sector
/// pattern
///
/// The employee and sector catalogs are immutable snapshots taken at
/// construction. An empty employee roster is substituted with the
/// built-in mock roster once, here, not per call.
pub struct AuditDistributor {
    employees: Vec<Employee>,
    sectors: Vec<Sector>,
}

impl AuditDistributor {
    pub fn new(employees: Vec<Employee>, sectors: Vec<Sector>) -> Self {
        let employees = if employees.is_empty() {
            mock_employees()
        } else {
            employees
        };
        Self { employees, sectors }
    }

    /// The roster actually in use (mock substitution included)
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Distribute assignments for a single local week
    ///
    /// Returns 5 sectors x 5 days = 25 assignments when the whole
    /// pattern row resolves; fewer when canonical names are missing
    /// from the catalog, and none when no sector resolves.
    /// Output order is sector-major, then day 1..5.
    pub fn distribute_for_week(&self, local_week: u32, _year: i32) -> Vec<AuditAssignment> {
        let mut rotation = RotationState::new(&self.employees);
        let week_sectors = sectors_for_week(local_week, &self.sectors);

        let mut assignments = Vec::with_capacity(week_sectors.len() * 5);
        for sector in &week_sectors {
            for day in 1..=5 {
                let auditor = rotation.next_auditor(day, &self.employees);
                let (checklist_id, checklist_name) = rotation.next_checklist(&auditor.id);

                assignments.push(AuditAssignment {
                    sector_id: sector.id.clone(),
                    employee_id: auditor.id.clone(),
                    checklist_id,
                    checklist_name,
                    sector_name: sector.name.clone(),
                    employee_name: auditor.name.clone(),
                    day,
                });
            }
        }

        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sector_pattern::CANONICAL_SECTOR_NAMES;

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

    #[test]
    fn test_empty_roster_falls_back_to_mock_employees() {
        let distributor = AuditDistributor::new(vec![], full_catalog());
        assert_eq!(distributor.employees().len(), 8);
        assert_eq!(distributor.employees()[0].id, "emp-mock-1");
    }

    #[test]
    fn test_single_auditor_handles_pool_exhaustion() {
        // With one auditor, every day exhausts the pool immediately
        // and the restart fallback keeps assigning that auditor.
        let distributor = AuditDistributor::new(roster(1), full_catalog());
        let assignments = distributor.distribute_for_week(1, 2024);

        assert_eq!(assignments.len(), 25);
        assert!(assignments.iter().all(|a| a.employee_id == "emp1"));
    }

    #[test]
    fn test_checklist_rotation_restarts_after_six_types() {
        // One auditor, 25 cells: the 6 types cycle with a restart
        // from "Processo" after each exhaustion.
        let distributor = AuditDistributor::new(roster(1), full_catalog());
        let assignments = distributor.distribute_for_week(1, 2024);

        assert_eq!(assignments[0].checklist_id, "ck-processo");
        assert_eq!(assignments[6].checklist_id, "ck-processo");

        // First six draws cover all six types
        let mut first_six: Vec<&str> = assignments[..6]
            .iter()
            .map(|a| a.checklist_id.as_str())
            .collect();
        first_six.sort_unstable();
        first_six.dedup();
        assert_eq!(first_six.len(), 6);
    }

    #[test]
    fn test_no_auditor_repeats_within_a_day_while_pool_lasts() {
        let distributor = AuditDistributor::new(roster(8), full_catalog());
        let assignments = distributor.distribute_for_week(1, 2024);

        // 5 sectors per day and 8 auditors: no day needs a repeat
        for day in 1..=5 {
            let mut ids: Vec<&str> = assignments
                .iter()
                .filter(|a| a.day == day)
                .map(|a| a.employee_id.as_str())
                .collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total);
        }
    }

    #[test]
    fn test_state_does_not_leak_between_calls() {
        let distributor = AuditDistributor::new(roster(4), full_catalog());
        let first = distributor.distribute_for_week(1, 2024);
        let second = distributor.distribute_for_week(1, 2024);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_sector_catalog_yields_no_assignments() {
        let distributor = AuditDistributor::new(roster(4), vec![]);
        assert!(distributor.distribute_for_week(1, 2024).is_empty());
    }

    #[test]
    fn test_output_is_sector_major_day_minor() {
        let distributor = AuditDistributor::new(roster(4), full_catalog());
        let assignments = distributor.distribute_for_week(2, 2024);

        assert_eq!(assignments.len(), 25);
        for (i, assignment) in assignments.iter().enumerate() {
            assert_eq!(assignment.day, (i as u32 % 5) + 1);
        }
        // 5 consecutive rows share a sector
        for chunk in assignments.chunks(5) {
            assert!(chunk.iter().all(|a| a.sector_id == chunk[0].sector_id));
        }
    }
}
