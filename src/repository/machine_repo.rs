// ==========================================
// LPA Audit System - Machine repository
// ==========================================

use crate::domain::Machine;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const DATE_FMT: &str = "%Y-%m-%d";

/// Machine registry repository
pub struct MachineRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MachineRepository {
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

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Machine> {
        Ok(Machine {
            id: row.get(0)?,
            name: row.get(1)?,
            code: row.get(2)?,
            sector: row.get(3)?,
            description: row.get(4)?,
            created_at: NaiveDate::parse_from_str(&row.get::<_, String>(5)?, DATE_FMT)
                .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        })
    }

    pub fn list(&self) -> RepositoryResult<Vec<Machine>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, code, sector, description, created_at
            FROM machine
            ORDER BY rowid
            "#,
        )?;

        let machines = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<Machine>>>()?;

        Ok(machines)
    }

    pub fn insert(&self, machine: &Machine) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO machine (id, name, code, sector, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                machine.id,
                machine.name,
                machine.code,
                machine.sector,
                machine.description,
                machine.created_at.format(DATE_FMT).to_string(),
            ],
        )?;
        Ok(())
    }

    pub fn update(&self, machine: &Machine) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE machine SET name = ?2, code = ?3, sector = ?4, description = ?5
            WHERE id = ?1
            "#,
            params![
                machine.id,
                machine.name,
                machine.code,
                machine.sector,
                machine.description,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Machine".to_string(),
                id: machine.id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM machine WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Replace the whole registry in one transaction
    pub fn replace_all(&self, machines: &[Machine]) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute("DELETE FROM machine", [])?;
        for machine in machines {
            tx.execute(
                r#"
                INSERT INTO machine (id, name, code, sector, description, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    machine.id,
                    machine.name,
                    machine.code,
                    machine.sector,
                    machine.description,
                    machine.created_at.format(DATE_FMT).to_string(),
                ],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }
}
