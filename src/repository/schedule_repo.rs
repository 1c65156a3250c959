// ==========================================
// LPA Audit System - Schedule repository
// ==========================================
// Persisted schedule entries. Generation replaces entries scoped to
// one (month, year) and never touches other months.
// ==========================================

use crate::domain::types::ScheduleStatus;
use crate::domain::ScheduleEntry;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// Schedule entry repository
pub struct ScheduleRepository {
    conn: Arc<Mutex<Connection>>,
}

// row with the status column still unparsed
type RawEntryRow = (ScheduleEntryColumns, String);

struct ScheduleEntryColumns {
    id: String,
    week_number: u32,
    day_of_week: u32,
    month: u32,
    year: i32,
    employee_id: String,
    sector_id: String,
    checklist_id: String,
}

impl ScheduleEntryColumns {
    fn into_entry(self, status: ScheduleStatus) -> ScheduleEntry {
        ScheduleEntry {
            id: self.id,
            week_number: self.week_number,
            day_of_week: self.day_of_week,
            month: self.month,
            year: self.year,
            employee_id: self.employee_id,
            sector_id: self.sector_id,
            checklist_id: self.checklist_id,
            status,
        }
    }
}

impl ScheduleRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<RawEntryRow> {
        let columns = ScheduleEntryColumns {
            id: row.get(0)?,
            week_number: row.get::<_, i64>(1)? as u32,
            day_of_week: row.get::<_, i64>(2)? as u32,
            month: row.get::<_, i64>(3)? as u32,
            year: row.get::<_, i64>(4)? as i32,
            employee_id: row.get(5)?,
            sector_id: row.get(6)?,
            checklist_id: row.get(7)?,
        };
        Ok((columns, row.get::<_, String>(8)?))
    }

    fn finish_rows(rows: Vec<RawEntryRow>) -> RepositoryResult<Vec<ScheduleEntry>> {
        rows.into_iter()
            .map(|(columns, status)| {
                let status = status.parse::<ScheduleStatus>().map_err(|message| {
                    RepositoryError::FieldValueError {
                        field: "status".to_string(),
                        message,
                    }
                })?;
                Ok(columns.into_entry(status))
            })
            .collect()
    }

    const SELECT: &'static str = r#"
        SELECT id, week_number, day_of_week, month, year,
               employee_id, sector_id, checklist_id, status
        FROM schedule_entry
    "#;

    /// Every persisted entry, ordered for stable display
    pub fn list(&self) -> RepositoryResult<Vec<ScheduleEntry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY year, month, week_number, day_of_week, rowid",
            Self::SELECT
        ))?;

        let rows = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Self::finish_rows(rows)
    }

    /// Entries of one (month, year)
    pub fn list_by_month(&self, month: u32, year: i32) -> RepositoryResult<Vec<ScheduleEntry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE month = ?1 AND year = ?2 ORDER BY week_number, day_of_week, rowid",
            Self::SELECT
        ))?;

        let rows = stmt
            .query_map(params![month as i64, year as i64], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Self::finish_rows(rows)
    }

    pub fn insert(&self, entry: &ScheduleEntry) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        Self::insert_with(&conn, entry)?;
        Ok(())
    }

    fn insert_with(conn: &Connection, entry: &ScheduleEntry) -> rusqlite::Result<usize> {
        conn.execute(
            r#"
            INSERT INTO schedule_entry (
                id, week_number, day_of_week, month, year,
                employee_id, sector_id, checklist_id, status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                entry.id,
                entry.week_number as i64,
                entry.day_of_week as i64,
                entry.month as i64,
                entry.year as i64,
                entry.employee_id,
                entry.sector_id,
                entry.checklist_id,
                entry.status.as_str(),
            ],
        )
    }

    /// Set the status of one entry
    pub fn update_status(&self, id: &str, status: ScheduleStatus) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE schedule_entry SET status = ?2 WHERE id = ?1",
            params![id, status.as_str()],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "ScheduleEntry".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM schedule_entry WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Replace every entry of (month, year) with the given list
    ///
    /// One transaction: delete scoped to the month, then insert.
    /// Entries of other months are untouched.
    pub fn replace_month(
        &self,
        month: u32,
        year: i32,
        entries: &[ScheduleEntry],
    ) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            "DELETE FROM schedule_entry WHERE month = ?1 AND year = ?2",
            params![month as i64, year as i64],
        )?;
        for entry in entries {
            Self::insert_with(&tx, entry)?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }

    /// Drop entries of months strictly before (month, year)
    ///
    /// Returns the number of removed entries.
    pub fn clean_before(&self, month: u32, year: i32) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let removed = conn.execute(
            r#"
            DELETE FROM schedule_entry
            WHERE year < ?2 OR (year = ?2 AND month < ?1)
            "#,
            params![month as i64, year as i64],
        )?;
        Ok(removed)
    }
}
