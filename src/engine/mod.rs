// ==========================================
// LPA Audit System - Engine layer
// ==========================================
// Scheduling rules: fixed sector rotation, auditor and checklist
// rotation, global week numbering, month generation.
// Constraint: engines never build SQL; persistence goes through the
// repository layer only.
// ==========================================

pub mod checklist_types;
pub mod distributor;
pub mod generator;
pub mod sector_pattern;
pub mod week_numbering;

// Re-export core engines
pub use checklist_types::{checklist_display_name, normalize_checklist_id, CHECKLIST_TYPES};
pub use distributor::{mock_employees, AuditDistributor};
pub use generator::ScheduleGenerator;
pub use sector_pattern::{sectors_for_week, CANONICAL_SECTOR_NAMES};
pub use week_numbering::{
    count_weeks_in_month, global_week_numbers_for_month, local_weeks_in_month, week_of_month,
};
