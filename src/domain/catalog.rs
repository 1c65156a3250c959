// ==========================================
// LPA Audit System - Catalog entities
// ==========================================
// Registry data managed outside the scheduling engine: the engine
// receives immutable snapshots of these lists and never mutates them.
// ==========================================

use crate::domain::types::ItemType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Sector - one of the physical production stations
// ==========================================
// Pattern lookup matches `name` against the 8 canonical pattern
// names; sectors with non-canonical names are excluded from
// generated weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: String,
    pub name: String,
    pub checklist_id: String,
}

// ==========================================
// Employee - auditor or other staff
// ==========================================
// The distributor treats every provided employee as an eligible
// auditor regardless of role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub sector: String,
}

// ==========================================
// Machine - registered equipment in a sector
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub code: String,
    pub sector: String,
    pub description: String,
    pub created_at: NaiveDate,
}

// ==========================================
// ChecklistItem - one question of a checklist
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub question: String,
    pub item_type: ItemType,
}

// ==========================================
// Checklist - an ordered list of questions
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    pub category: String,
    pub level: Option<String>, // e.g. "N1", "N2"
    pub items: Vec<ChecklistItem>,
    pub created_at: NaiveDate,
}
