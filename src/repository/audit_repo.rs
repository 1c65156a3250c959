// ==========================================
// LPA Audit System - Audit record repository
// ==========================================
// A record and its answers are written in one transaction; photos
// are stored as a JSON array of base64 strings.
// ==========================================

use crate::domain::types::{AuditResult, Conformity};
use crate::domain::{AuditAnswer, AuditRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Audit record repository
pub struct AuditRepository {
    conn: Arc<Mutex<Connection>>,
}

// head columns of audit_record, answers loaded separately
type RawRecordRow = (
    String,         // id
    String,         // schedule_entry_id
    String,         // employee_id
    String,         // machine_id
    String,         // checklist_id
    String,         // audit_date
    String,         // observations
    String,         // photos_json
    String,         // result
    String,         // created_at
);

impl AuditRepository {
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

    fn load_answers(conn: &Connection, audit_id: &str) -> RepositoryResult<Vec<AuditAnswer>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT checklist_item_id, answer, conformity
            FROM audit_answer
            WHERE audit_id = ?1
            ORDER BY position
            "#,
        )?;

        let raw = stmt
            .query_map(params![audit_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        raw.into_iter()
            .map(|(checklist_item_id, answer, conformity)| {
                let conformity = conformity.parse::<Conformity>().map_err(|message| {
                    RepositoryError::FieldValueError {
                        field: "conformity".to_string(),
                        message,
                    }
                })?;
                Ok(AuditAnswer {
                    checklist_item_id,
                    answer,
                    conformity,
                })
            })
            .collect()
    }

    fn assemble(conn: &Connection, raw: RawRecordRow) -> RepositoryResult<AuditRecord> {
        let (
            id,
            schedule_entry_id,
            employee_id,
            machine_id,
            checklist_id,
            audit_date,
            observations,
            photos_json,
            result,
            created_at,
        ) = raw;

        let answers = Self::load_answers(conn, &id)?;
        let photos: Vec<String> = serde_json::from_str(&photos_json).map_err(|e| {
            RepositoryError::FieldValueError {
                field: "photos_json".to_string(),
                message: e.to_string(),
            }
        })?;
        let result = result
            .parse::<AuditResult>()
            .map_err(|message| RepositoryError::FieldValueError {
                field: "result".to_string(),
                message,
            })?;

        Ok(AuditRecord {
            id,
            schedule_entry_id,
            employee_id,
            machine_id,
            checklist_id,
            date: NaiveDate::parse_from_str(&audit_date, DATE_FMT)
                .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
            answers,
            observations,
            photos,
            result,
            created_at: NaiveDateTime::parse_from_str(&created_at, DATETIME_FMT).unwrap_or_else(
                |_| {
                    NaiveDate::from_ymd_opt(1970, 1, 1)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap()
                },
            ),
        })
    }

    const SELECT: &'static str = r#"
        SELECT id, schedule_entry_id, employee_id, machine_id, checklist_id,
               audit_date, observations, photos_json, result, created_at
        FROM audit_record
    "#;

    fn map_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRecordRow> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
            row.get(9)?,
        ))
    }

    pub fn list(&self) -> RepositoryResult<Vec<AuditRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY created_at", Self::SELECT))?;
        let raws = stmt
            .query_map([], Self::map_raw)?
            .collect::<SqliteResult<Vec<_>>>()?;

        raws.into_iter()
            .map(|raw| Self::assemble(&conn, raw))
            .collect()
    }

    pub fn list_by_employee(&self, employee_id: &str) -> RepositoryResult<Vec<AuditRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE employee_id = ?1 ORDER BY created_at",
            Self::SELECT
        ))?;
        let raws = stmt
            .query_map(params![employee_id], Self::map_raw)?
            .collect::<SqliteResult<Vec<_>>>()?;

        raws.into_iter()
            .map(|raw| Self::assemble(&conn, raw))
            .collect()
    }

    /// Insert a record and its answers in one transaction
    pub fn insert(&self, record: &AuditRecord) -> RepositoryResult<()> {
        let photos_json = serde_json::to_string(&record.photos)
            .map_err(|e| RepositoryError::InternalError(e.to_string()))?;

        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            r#"
            INSERT INTO audit_record (
                id, schedule_entry_id, employee_id, machine_id, checklist_id,
                audit_date, observations, photos_json, result, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                record.id,
                record.schedule_entry_id,
                record.employee_id,
                record.machine_id,
                record.checklist_id,
                record.date.format(DATE_FMT).to_string(),
                record.observations,
                photos_json,
                record.result.as_str(),
                record.created_at.format(DATETIME_FMT).to_string(),
            ],
        )?;

        for (position, answer) in record.answers.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO audit_answer (
                    audit_id, checklist_item_id, answer, conformity, position
                ) VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    record.id,
                    answer.checklist_item_id,
                    answer.answer,
                    answer.conformity.as_str(),
                    position as i64,
                ],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }
}
