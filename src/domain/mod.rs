// ==========================================
// LPA Audit System - Domain layer
// ==========================================
// Entities and value types shared by every layer.
// Constraint: plain data, no persistence or engine logic here.
// ==========================================

pub mod audit;
pub mod catalog;
pub mod schedule;
pub mod types;

// Re-export core entities
pub use audit::{AuditAnswer, AuditRecord};
pub use catalog::{Checklist, ChecklistItem, Employee, Machine, Sector};
pub use schedule::{AuditAssignment, ScheduleEntry};
pub use types::{AuditResult, Conformity, ItemType, ScheduleStatus};
