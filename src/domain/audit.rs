// ==========================================
// LPA Audit System - Audit record entities
// ==========================================
// A completed audit filed against a schedule entry, with one answer
// per checklist item.
// ==========================================

use crate::domain::types::{AuditResult, Conformity};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// AuditAnswer - answer to one checklist item
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditAnswer {
    pub checklist_item_id: String,
    pub answer: String,
    pub conformity: Conformity,
}

// ==========================================
// AuditRecord - one performed audit
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    pub schedule_entry_id: String,
    pub employee_id: String,
    pub machine_id: String,
    pub checklist_id: String,
    pub date: NaiveDate,
    pub answers: Vec<AuditAnswer>,
    pub observations: String,
    pub photos: Vec<String>, // base64
    pub result: AuditResult,
    pub created_at: NaiveDateTime,
}
