// ==========================================
// LPA Audit System - SQLite connection init
// ==========================================
// Goals:
// - unify PRAGMA behavior across every Connection::open
//   (no module with foreign keys off while others have it on)
// - unify busy_timeout to reduce spurious busy errors
// - idempotent schema creation so a fresh database is usable
//   without a separate migration step
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMA set to a SQLite connection
///
/// Note:
/// - foreign_keys must be enabled per connection
/// - busy_timeout must be configured per connection
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create all tables if they do not exist yet
///
/// Schema notes:
/// - `month` is the 0-based month index (January = 0), matching the
///   week-numbering contract of the scheduling engine
/// - `day_of_week` is 1-5 (Monday-Friday)
/// - audit photos are stored as a JSON array of base64 strings
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            role        TEXT NOT NULL,
            sector      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sector (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            checklist_id TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS machine (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            code        TEXT NOT NULL,
            sector      TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS checklist (
            id         TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            category   TEXT NOT NULL,
            level      TEXT,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS checklist_item (
            id           TEXT PRIMARY KEY,
            checklist_id TEXT NOT NULL REFERENCES checklist(id) ON DELETE CASCADE,
            question     TEXT NOT NULL,
            item_type    TEXT NOT NULL,
            position     INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS schedule_entry (
            id           TEXT PRIMARY KEY,
            week_number  INTEGER NOT NULL,
            day_of_week  INTEGER NOT NULL,
            month        INTEGER NOT NULL,
            year         INTEGER NOT NULL,
            employee_id  TEXT NOT NULL,
            sector_id    TEXT NOT NULL,
            checklist_id TEXT NOT NULL,
            status       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_schedule_entry_month
            ON schedule_entry(year, month);

        CREATE TABLE IF NOT EXISTS audit_record (
            id                TEXT PRIMARY KEY,
            schedule_entry_id TEXT NOT NULL,
            employee_id       TEXT NOT NULL,
            machine_id        TEXT NOT NULL,
            checklist_id      TEXT NOT NULL,
            audit_date        TEXT NOT NULL,
            observations      TEXT NOT NULL,
            photos_json       TEXT NOT NULL DEFAULT '[]',
            result            TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS audit_answer (
            audit_id          TEXT NOT NULL REFERENCES audit_record(id) ON DELETE CASCADE,
            checklist_item_id TEXT NOT NULL,
            answer            TEXT NOT NULL,
            conformity        TEXT NOT NULL,
            position          INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_audit_answer_audit
            ON audit_answer(audit_id);
        "#,
    )?;
    Ok(())
}

/// Open a connection and make sure the schema exists
pub fn open_and_init(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}
