// ==========================================
// LPA Audit System - Schedule API
// ==========================================
// Month generation, manual entries and status maintenance.
// ==========================================

use std::sync::Arc;

use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::ScheduleStatus;
use crate::domain::ScheduleEntry;
use crate::engine::generator::ScheduleGenerator;
use crate::engine::week_numbering::global_week_numbers_for_month;
use crate::repository::ScheduleRepository;

/// Input for a manually added schedule entry
#[derive(Debug, Clone)]
pub struct NewScheduleEntry {
    pub week_number: u32,
    pub day_of_week: u32,
    pub month: u32,
    pub year: i32,
    pub employee_id: String,
    pub sector_id: String,
    pub checklist_id: String,
}

/// Schedule management API
pub struct ScheduleApi {
    generator: ScheduleGenerator,
    schedule_repo: Arc<ScheduleRepository>,
}

impl ScheduleApi {
    pub fn new(generator: ScheduleGenerator, schedule_repo: Arc<ScheduleRepository>) -> Self {
        Self {
            generator,
            schedule_repo,
        }
    }

    fn check_month(month: u32) -> ApiResult<()> {
        if month > 11 {
            return Err(ApiError::Validation(format!(
                "month index out of range (0-11): {}",
                month
            )));
        }
        Ok(())
    }

    fn check_day(day: u32) -> ApiResult<()> {
        if !(1..=5).contains(&day) {
            return Err(ApiError::Validation(format!(
                "day of week out of range (1-5): {}",
                day
            )));
        }
        Ok(())
    }

    /// Generate and persist a month's schedule
    ///
    /// Warns when the result is smaller than a full pattern month
    /// would produce, so missing sector registrations surface to the
    /// operator instead of passing silently.
    pub fn generate_month(
        &self,
        month: u32,
        year: i32,
        first_week_number: Option<u32>,
    ) -> ApiResult<Vec<ScheduleEntry>> {
        Self::check_month(month)?;

        let entries = self
            .generator
            .generate_schedule(month, year, first_week_number)?;

        let weeks = global_week_numbers_for_month(month, year, first_week_number);
        let expected = weeks.len() * 25;
        if entries.len() < expected {
            tracing::warn!(
                month,
                year,
                generated = entries.len(),
                expected,
                "generated fewer assignments than a full month; check sector registrations"
            );
        }

        Ok(entries)
    }

    /// Entries of one month
    pub fn list_month(&self, month: u32, year: i32) -> ApiResult<Vec<ScheduleEntry>> {
        Self::check_month(month)?;
        Ok(self.schedule_repo.list_by_month(month, year)?)
    }

    /// Global week numbers a month would be labeled with
    pub fn week_numbers_for_month(
        &self,
        month: u32,
        year: i32,
        first_week_number: Option<u32>,
    ) -> ApiResult<Vec<u32>> {
        Self::check_month(month)?;
        Ok(global_week_numbers_for_month(month, year, first_week_number))
    }

    /// Add a manual entry alongside the generated ones
    pub fn add_entry(&self, input: NewScheduleEntry) -> ApiResult<ScheduleEntry> {
        Self::check_month(input.month)?;
        Self::check_day(input.day_of_week)?;

        let entry = ScheduleEntry {
            id: Uuid::new_v4().to_string(),
            week_number: input.week_number,
            day_of_week: input.day_of_week,
            month: input.month,
            year: input.year,
            employee_id: input.employee_id,
            sector_id: input.sector_id,
            checklist_id: input.checklist_id,
            status: ScheduleStatus::Pending,
        };
        self.schedule_repo.insert(&entry)?;
        Ok(entry)
    }

    /// Set the status of one entry (e.g. mark it missed)
    pub fn set_entry_status(&self, id: &str, status: ScheduleStatus) -> ApiResult<()> {
        self.schedule_repo.update_status(id, status)?;
        Ok(())
    }

    pub fn delete_entry(&self, id: &str) -> ApiResult<()> {
        self.schedule_repo.delete(id)?;
        Ok(())
    }

    /// Drop entries of months before (month, year)
    pub fn clean_old_entries(&self, month: u32, year: i32) -> ApiResult<usize> {
        Self::check_month(month)?;
        Ok(self.schedule_repo.clean_before(month, year)?)
    }
}
