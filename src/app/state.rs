// ==========================================
// LPA Audit System - Application state
// ==========================================
// Owns the shared connection and every API/repository instance.
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::api::{AuditApi, ScheduleApi};
use crate::engine::generator::{GeneratorRepositories, ScheduleGenerator};
use crate::repository::{
    AuditRepository, ChecklistRepository, EmployeeRepository, MachineRepository,
    ScheduleRepository, SectorRepository,
};

/// Application state
///
/// Holds every API instance and shared resource. All repositories
/// share one SQLite connection with the unified PRAGMA set.
pub struct AppState {
    /// Database path
    pub db_path: String,

    /// Schedule management API
    pub schedule_api: Arc<ScheduleApi>,

    /// Audit record API
    pub audit_api: Arc<AuditApi>,

    /// Catalog repositories (registry screens talk to these directly)
    pub employee_repo: Arc<EmployeeRepository>,
    pub sector_repo: Arc<SectorRepository>,
    pub machine_repo: Arc<MachineRepository>,
    pub checklist_repo: Arc<ChecklistRepository>,
    pub schedule_repo: Arc<ScheduleRepository>,
    pub audit_repo: Arc<AuditRepository>,
}

impl AppState {
    /// Create the application state over a database path
    ///
    /// Opens the connection, initializes the schema and wires every
    /// repository and API.
    pub fn new(db_path: &str) -> anyhow::Result<Self> {
        tracing::info!(db_path, "initializing AppState");

        let conn = crate::db::open_and_init(db_path)
            .with_context(|| format!("cannot open database at {}", db_path))?;
        let conn = Arc::new(Mutex::new(conn));

        let employee_repo = Arc::new(EmployeeRepository::from_connection(conn.clone()));
        let sector_repo = Arc::new(SectorRepository::from_connection(conn.clone()));
        let machine_repo = Arc::new(MachineRepository::from_connection(conn.clone()));
        let checklist_repo = Arc::new(ChecklistRepository::from_connection(conn.clone()));
        let schedule_repo = Arc::new(ScheduleRepository::from_connection(conn.clone()));
        let audit_repo = Arc::new(AuditRepository::from_connection(conn));

        let generator = ScheduleGenerator::new(GeneratorRepositories {
            employee_repo: employee_repo.clone(),
            sector_repo: sector_repo.clone(),
            checklist_repo: checklist_repo.clone(),
            schedule_repo: schedule_repo.clone(),
        });

        let schedule_api = Arc::new(ScheduleApi::new(generator, schedule_repo.clone()));
        let audit_api = Arc::new(AuditApi::new(audit_repo.clone(), schedule_repo.clone()));

        Ok(Self {
            db_path: db_path.to_string(),
            schedule_api,
            audit_api,
            employee_repo,
            sector_repo,
            machine_repo,
            checklist_repo,
            schedule_repo,
            audit_repo,
        })
    }
}

/// Resolve the default database path
///
/// Precedence: LPA_AUDIT_DB_PATH environment variable, then the user
/// data directory, then the working directory as a last resort.
pub fn default_db_path() -> String {
    if let Ok(path) = std::env::var("LPA_AUDIT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut dir = PathBuf::from(".");
    if let Some(data_dir) = dirs::data_dir() {
        // separate dev directory so development runs do not touch
        // production data
        #[cfg(debug_assertions)]
        {
            dir = data_dir.join("lpa-audit-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            dir = data_dir.join("lpa-audit");
        }

        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!("cannot create data directory {:?}: {}", dir, e);
            dir = PathBuf::from(".");
        }
    }

    dir.join("lpa_audit.db").to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_ends_with_db() {
        let path = default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}
