// ==========================================
// LPA Audit System - Schedule generator
// ==========================================
// Top-level entry point: enumerates a month's local weeks, runs the
// distributor per week, stamps global week numbers and persists the
// result with month-scoped replacement.
//
// Missing data never raises an error here: an empty sector catalog
// produces an empty result, an empty roster falls back to the mock
// auditors. Only real repository failures propagate.
// ==========================================

use std::sync::Arc;

use chrono::{Datelike, Local};
use uuid::Uuid;

use crate::domain::types::ScheduleStatus;
use crate::domain::{Checklist, ChecklistItem, ItemType, ScheduleEntry};
use crate::engine::checklist_types::{normalize_checklist_id, CHECKLIST_TYPES};
use crate::engine::distributor::AuditDistributor;
use crate::engine::week_numbering::{base_week_for_month, local_weeks_in_month};
use crate::repository::{
    ChecklistRepository, EmployeeRepository, RepositoryResult, ScheduleRepository,
    SectorRepository,
};

/// Repositories the generator needs, aggregated to keep the
/// constructor small
#[derive(Clone)]
pub struct GeneratorRepositories {
    pub employee_repo: Arc<EmployeeRepository>,
    pub sector_repo: Arc<SectorRepository>,
    pub checklist_repo: Arc<ChecklistRepository>,
    pub schedule_repo: Arc<ScheduleRepository>,
}

/// Monthly schedule generator
pub struct ScheduleGenerator {
    repos: GeneratorRepositories,
}

impl ScheduleGenerator {
    pub fn new(repos: GeneratorRepositories) -> Self {
        Self { repos }
    }

    /// Generate and persist the schedule of one month
    ///
    /// `month` is 0-based (January = 0). `first_week_number` pins the
    /// global number of the month's first local week; without it the
    /// baseline year-accumulating rule applies.
    ///
    /// Returns the newly generated entries. An empty sector catalog
    /// yields an empty vec and persists nothing; callers decide
    /// whether a small result deserves a user-facing warning.
    pub fn generate_schedule(
        &self,
        month: u32,
        year: i32,
        first_week_number: Option<u32>,
    ) -> RepositoryResult<Vec<ScheduleEntry>> {
        self.ensure_mandatory_checklists()?;

        let employees = self.repos.employee_repo.list()?;
        if employees.is_empty() {
            tracing::info!("no registered employees, using the built-in mock roster");
        }

        let sectors = self.repos.sector_repo.list()?;
        if sectors.is_empty() {
            tracing::warn!(month, year, "no registered sectors, nothing to generate");
            return Ok(Vec::new());
        }

        let local_weeks = local_weeks_in_month(year, month);
        let base_week = first_week_number.unwrap_or_else(|| base_week_for_month(month, year));

        let distributor = AuditDistributor::new(employees, sectors);
        let mut entries = Vec::new();
        for &local_week in &local_weeks {
            let assignments = distributor.distribute_for_week(local_week, year);
            let global_week = base_week + (local_week - 1);

            for assignment in assignments {
                entries.push(ScheduleEntry {
                    id: Uuid::new_v4().to_string(),
                    week_number: global_week,
                    day_of_week: assignment.day,
                    month,
                    year,
                    employee_id: assignment.employee_id,
                    sector_id: assignment.sector_id,
                    checklist_id: assignment.checklist_id,
                    status: ScheduleStatus::Pending,
                });
            }
        }

        self.repos.schedule_repo.replace_month(month, year, &entries)?;

        tracing::info!(
            month,
            year,
            base_week,
            weeks = local_weeks.len(),
            entries = entries.len(),
            "schedule generated"
        );

        Ok(entries)
    }

    /// Make sure the six mandatory checklists exist
    ///
    /// Missing ones are created with the shared id rule; checklists
    /// that do not match a mandatory type label are left untouched.
    pub fn ensure_mandatory_checklists(&self) -> RepositoryResult<usize> {
        let existing = self.repos.checklist_repo.list()?;
        let today = Local::now().date_naive();

        let mut created = 0;
        for type_name in CHECKLIST_TYPES {
            if existing.iter().any(|c| c.name == type_name) {
                continue;
            }

            let checklist = Checklist {
                id: normalize_checklist_id(type_name),
                name: type_name.to_string(),
                category: type_name.to_string(),
                level: None,
                items: vec![
                    ChecklistItem {
                        id: format!("ci-{}", Uuid::new_v4()),
                        question: format!("Verificar {}?", type_name),
                        item_type: ItemType::OkNok,
                    },
                    ChecklistItem {
                        id: format!("ci-{}", Uuid::new_v4()),
                        question: "Observações".to_string(),
                        item_type: ItemType::Text,
                    },
                ],
                created_at: today,
            };

            self.repos.checklist_repo.insert(&checklist)?;
            created += 1;
        }

        if created > 0 {
            tracing::info!(created, "mandatory checklists created");
        }
        Ok(created)
    }

    /// Current date helper used by binaries (0-based month)
    pub fn current_month() -> (u32, i32) {
        let now = Local::now().date_naive();
        (now.month0(), now.year())
    }
}
