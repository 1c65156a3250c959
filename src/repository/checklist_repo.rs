// ==========================================
// LPA Audit System - Checklist repository
// ==========================================
// Checklists with their ordered items; items live in
// checklist_item and are replaced together with their parent.
// ==========================================

use crate::domain::types::ItemType;
use crate::domain::{Checklist, ChecklistItem};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

const DATE_FMT: &str = "%Y-%m-%d";

/// Checklist registry repository
pub struct ChecklistRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ChecklistRepository {
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

    fn load_items(conn: &Connection, checklist_id: &str) -> RepositoryResult<Vec<ChecklistItem>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT id, question, item_type
            FROM checklist_item
            WHERE checklist_id = ?1
            ORDER BY position
            "#,
        )?;

        let items = stmt
            .query_map(params![checklist_id], |row| {
                let item_type: String = row.get(2)?;
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?, item_type))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        items
            .into_iter()
            .map(|(id, question, item_type)| {
                let item_type = item_type.parse::<ItemType>().map_err(|message| {
                    RepositoryError::FieldValueError {
                        field: "item_type".to_string(),
                        message,
                    }
                })?;
                Ok(ChecklistItem {
                    id,
                    question,
                    item_type,
                })
            })
            .collect()
    }

    pub fn list(&self) -> RepositoryResult<Vec<Checklist>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, category, level, created_at
            FROM checklist
            ORDER BY rowid
            "#,
        )?;

        let heads = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        let mut checklists = Vec::with_capacity(heads.len());
        for (id, name, category, level, created_at) in heads {
            let items = Self::load_items(&conn, &id)?;
            checklists.push(Checklist {
                items,
                created_at: NaiveDate::parse_from_str(&created_at, DATE_FMT)
                    .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
                id,
                name,
                category,
                level,
            });
        }

        Ok(checklists)
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Checklist>> {
        let conn = self.get_conn()?;
        let head = conn
            .query_row(
                r#"
                SELECT id, name, category, level, created_at
                FROM checklist
                WHERE id = ?1
                "#,
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        match head {
            None => Ok(None),
            Some((id, name, category, level, created_at)) => {
                let items = Self::load_items(&conn, &id)?;
                Ok(Some(Checklist {
                    items,
                    created_at: NaiveDate::parse_from_str(&created_at, DATE_FMT)
                        .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
                    id,
                    name,
                    category,
                    level,
                }))
            }
        }
    }

    /// Insert a checklist together with its items
    pub fn insert(&self, checklist: &Checklist) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            r#"
            INSERT INTO checklist (id, name, category, level, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                checklist.id,
                checklist.name,
                checklist.category,
                checklist.level,
                checklist.created_at.format(DATE_FMT).to_string(),
            ],
        )?;

        for (position, item) in checklist.items.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO checklist_item (id, checklist_id, question, item_type, position)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    item.id,
                    checklist.id,
                    item.question,
                    item.item_type.as_str(),
                    position as i64,
                ],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }

    /// Update a checklist, replacing its items
    pub fn update(&self, checklist: &Checklist) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let affected = tx.execute(
            r#"
            UPDATE checklist SET name = ?2, category = ?3, level = ?4
            WHERE id = ?1
            "#,
            params![
                checklist.id,
                checklist.name,
                checklist.category,
                checklist.level,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Checklist".to_string(),
                id: checklist.id.clone(),
            });
        }

        tx.execute(
            "DELETE FROM checklist_item WHERE checklist_id = ?1",
            params![checklist.id],
        )?;
        for (position, item) in checklist.items.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO checklist_item (id, checklist_id, question, item_type, position)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    item.id,
                    checklist.id,
                    item.question,
                    item.item_type.as_str(),
                    position as i64,
                ],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        // checklist_item rows go with the parent via FK cascade
        conn.execute("DELETE FROM checklist WHERE id = ?1", params![id])?;
        Ok(())
    }
}
