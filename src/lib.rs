// ==========================================
// LPA Audit System - Core Library
// ==========================================
// Stack: Rust + SQLite
// Scope: factory-floor layered process audits -
//        catalogs, schedule distribution, audit records
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - scheduling rules
pub mod engine;

// Database infrastructure (connection init / unified PRAGMA)
pub mod db;

// Logging
pub mod logging;

// API layer - business interfaces
pub mod api;

// Application layer - state wiring and seed data
pub mod app;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{AuditResult, Conformity, ItemType, ScheduleStatus};

// Domain entities
pub use domain::{
    AuditAnswer, AuditAssignment, AuditRecord, Checklist, ChecklistItem, Employee, Machine,
    ScheduleEntry, Sector,
};

// Engines
pub use engine::{AuditDistributor, ScheduleGenerator};

// API
pub use api::{AuditApi, ScheduleApi};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Sistema de Auditoria LPA";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
