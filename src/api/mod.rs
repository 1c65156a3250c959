// ==========================================
// LPA Audit System - API layer
// ==========================================
// Thin orchestration over repositories and engines; the surface the
// application layer (CLI, future UI shell) talks to.
// ==========================================

pub mod audit_api;
pub mod error;
pub mod schedule_api;

// Re-export core interfaces
pub use audit_api::{AuditApi, NewAudit};
pub use error::{ApiError, ApiResult};
pub use schedule_api::{NewScheduleEntry, ScheduleApi};
