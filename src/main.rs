// ==========================================
// LPA Audit System - Main entry point
// ==========================================
// Opens the database, seeds empty catalogs and generates the current
// month's audit schedule.
// ==========================================

use lpa_audit::app::{default_db_path, seed, AppState};
use lpa_audit::engine::generator::ScheduleGenerator;

fn main() -> anyhow::Result<()> {
    lpa_audit::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", lpa_audit::APP_NAME);
    tracing::info!("version: {}", lpa_audit::VERSION);
    tracing::info!("==================================================");

    let db_path = default_db_path();
    tracing::info!("using database: {}", db_path);

    let state = AppState::new(&db_path)?;
    seed::seed_if_empty(&state)?;

    let (month, year) = ScheduleGenerator::current_month();
    let entries = state.schedule_api.generate_month(month, year, None)?;
    let weeks = state.schedule_api.week_numbers_for_month(month, year, None)?;

    for &week in &weeks {
        let count = entries.iter().filter(|e| e.week_number == week).count();
        tracing::info!(week, assignments = count, "week summary");
    }
    tracing::info!(
        month,
        year,
        weeks = weeks.len(),
        entries = entries.len(),
        "current month schedule ready"
    );

    Ok(())
}
