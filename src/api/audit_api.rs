// ==========================================
// LPA Audit System - Audit API
// ==========================================
// Filing an audit record marks the linked schedule entry completed.
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::domain::types::{AuditResult, ScheduleStatus};
use crate::domain::{AuditAnswer, AuditRecord};
use crate::repository::{AuditRepository, ScheduleRepository};

/// Input for a new audit record
#[derive(Debug, Clone)]
pub struct NewAudit {
    pub schedule_entry_id: String,
    pub employee_id: String,
    pub machine_id: String,
    pub checklist_id: String,
    pub date: NaiveDate,
    pub answers: Vec<AuditAnswer>,
    pub observations: String,
    pub photos: Vec<String>,
    pub result: AuditResult,
}

/// Audit record API
pub struct AuditApi {
    audit_repo: Arc<AuditRepository>,
    schedule_repo: Arc<ScheduleRepository>,
}

impl AuditApi {
    pub fn new(audit_repo: Arc<AuditRepository>, schedule_repo: Arc<ScheduleRepository>) -> Self {
        Self {
            audit_repo,
            schedule_repo,
        }
    }

    /// File an audit and complete the schedule entry it covers
    pub fn record_audit(&self, input: NewAudit) -> ApiResult<AuditRecord> {
        let record = AuditRecord {
            id: Uuid::new_v4().to_string(),
            schedule_entry_id: input.schedule_entry_id,
            employee_id: input.employee_id,
            machine_id: input.machine_id,
            checklist_id: input.checklist_id,
            date: input.date,
            answers: input.answers,
            observations: input.observations,
            photos: input.photos,
            result: input.result,
            created_at: Local::now().naive_local(),
        };

        self.audit_repo.insert(&record)?;
        self.schedule_repo
            .update_status(&record.schedule_entry_id, ScheduleStatus::Completed)?;

        tracing::info!(
            audit_id = %record.id,
            schedule_entry_id = %record.schedule_entry_id,
            result = %record.result,
            "audit recorded"
        );

        Ok(record)
    }

    pub fn list_audits(&self) -> ApiResult<Vec<AuditRecord>> {
        Ok(self.audit_repo.list()?)
    }

    pub fn list_audits_by_employee(&self, employee_id: &str) -> ApiResult<Vec<AuditRecord>> {
        Ok(self.audit_repo.list_by_employee(employee_id)?)
    }
}
