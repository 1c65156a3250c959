// ==========================================
// LPA Audit System - Repository layer
// ==========================================
// Data access over the shared SQLite connection.
// Constraint: repositories hold no business logic, all queries are
// parameterized.
// ==========================================

pub mod audit_repo;
pub mod checklist_repo;
pub mod employee_repo;
pub mod error;
pub mod machine_repo;
pub mod schedule_repo;
pub mod sector_repo;

// Re-export core repositories
pub use audit_repo::AuditRepository;
pub use checklist_repo::ChecklistRepository;
pub use employee_repo::EmployeeRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use machine_repo::MachineRepository;
pub use schedule_repo::ScheduleRepository;
pub use sector_repo::SectorRepository;
