// ==========================================
// LPA Audit System - Employee repository
// ==========================================
// Roster order matters to the distribution engine: list() returns
// employees in insertion (rowid) order.
// ==========================================

use crate::domain::Employee;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// Employee registry repository
pub struct EmployeeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EmployeeRepository {
    /// Create a repository over its own connection
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a repository over an existing shared connection
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// All employees in roster order
    pub fn list(&self) -> RepositoryResult<Vec<Employee>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, role, sector
            FROM employee
            ORDER BY rowid
            "#,
        )?;

        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    role: row.get(2)?,
                    sector: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<Employee>>>()?;

        Ok(employees)
    }

    pub fn insert(&self, employee: &Employee) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO employee (id, name, role, sector)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![employee.id, employee.name, employee.role, employee.sector],
        )?;
        Ok(())
    }

    pub fn update(&self, employee: &Employee) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE employee SET name = ?2, role = ?3, sector = ?4
            WHERE id = ?1
            "#,
            params![employee.id, employee.name, employee.role, employee.sector],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Employee".to_string(),
                id: employee.id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM employee WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Replace the whole roster in one transaction
    pub fn replace_all(&self, employees: &[Employee]) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute("DELETE FROM employee", [])?;
        for employee in employees {
            tx.execute(
                r#"
                INSERT INTO employee (id, name, role, sector)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![employee.id, employee.name, employee.role, employee.sector],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }
}
