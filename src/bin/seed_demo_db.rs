// ==========================================
// LPA Audit System - Demo database seeder
// ==========================================
// Resets the database to the default catalogs and generates the
// current month's schedule, so a fresh checkout has deterministic
// data to look at.
//
// Usage: seed_demo_db [db_path]
// ==========================================

use std::fs;
use std::path::Path;

use chrono::Local;

use lpa_audit::app::{default_db_path, seed, AppState};
use lpa_audit::engine::generator::ScheduleGenerator;

fn main() -> anyhow::Result<()> {
    lpa_audit::logging::init();

    let db_path = std::env::args().nth(1).unwrap_or_else(default_db_path);

    backup_and_reset_db(&db_path)?;

    let state = AppState::new(&db_path)?;
    seed::reset_to_defaults(&state)?;

    let (month, year) = ScheduleGenerator::current_month();
    let entries = state.schedule_api.generate_month(month, year, None)?;

    tracing::info!(
        db_path,
        employees = state.employee_repo.list()?.len(),
        sectors = state.sector_repo.list()?.len(),
        machines = state.machine_repo.list()?.len(),
        checklists = state.checklist_repo.list()?.len(),
        schedule_entries = entries.len(),
        "demo database ready"
    );

    Ok(())
}

fn backup_and_reset_db(db_path: &str) -> anyhow::Result<()> {
    let path = Path::new(db_path);
    if !path.exists() {
        return Ok(());
    }

    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_path = format!("{}.bak.{}", db_path, ts);
    fs::copy(path, &backup_path)?;
    fs::remove_file(path)?;

    tracing::info!("backed up {} -> {}", db_path, backup_path);
    Ok(())
}
