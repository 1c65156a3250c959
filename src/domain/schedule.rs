// ==========================================
// LPA Audit System - Schedule entities
// ==========================================
// Month convention: 0-based index (January = 0), the contract the
// global week numbering is defined against.
// Day convention: 1-5 = Monday-Friday.
// ==========================================

use crate::domain::types::ScheduleStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// AuditAssignment - transient distributor output
// ==========================================
// Produced by AuditDistributor::distribute_for_week, never persisted
// directly; the generator turns assignments into schedule entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditAssignment {
    pub sector_id: String,
    pub employee_id: String,
    pub checklist_id: String,
    pub checklist_name: String,
    pub sector_name: String,
    pub employee_name: String,
    pub day: u32, // 1-5 (Mon-Fri)
}

// ==========================================
// ScheduleEntry - persisted schedule record
// ==========================================
// Within one generated month, (week_number, day_of_week, sector_id)
// identifies at most one auto-generated entry; manual entries may
// add more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub week_number: u32, // global week number, >= 1
    pub day_of_week: u32, // 1-5 (Mon-Fri)
    pub month: u32,       // 0-11
    pub year: i32,
    pub employee_id: String,
    pub sector_id: String,
    pub checklist_id: String,
    pub status: ScheduleStatus,
}
