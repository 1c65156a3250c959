// ==========================================
// LPA Audit System - Sector repository
// ==========================================
// The sector catalog the pattern table resolves canonical names
// against. list() keeps insertion (rowid) order.
// ==========================================

use crate::domain::Sector;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// Sector registry repository
pub struct SectorRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SectorRepository {
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

    pub fn list(&self) -> RepositoryResult<Vec<Sector>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, checklist_id
            FROM sector
            ORDER BY rowid
            "#,
        )?;

        let sectors = stmt
            .query_map([], |row| {
                Ok(Sector {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    checklist_id: row.get(2)?,
                })
            })?
            .collect::<SqliteResult<Vec<Sector>>>()?;

        Ok(sectors)
    }

    pub fn insert(&self, sector: &Sector) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO sector (id, name, checklist_id)
            VALUES (?1, ?2, ?3)
            "#,
            params![sector.id, sector.name, sector.checklist_id],
        )?;
        Ok(())
    }

    pub fn update(&self, sector: &Sector) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE sector SET name = ?2, checklist_id = ?3
            WHERE id = ?1
            "#,
            params![sector.id, sector.name, sector.checklist_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Sector".to_string(),
                id: sector.id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM sector WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Replace the whole catalog in one transaction
    pub fn replace_all(&self, sectors: &[Sector]) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute("DELETE FROM sector", [])?;
        for sector in sectors {
            tx.execute(
                r#"
                INSERT INTO sector (id, name, checklist_id)
                VALUES (?1, ?2, ?3)
                "#,
                params![sector.id, sector.name, sector.checklist_id],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }
}
