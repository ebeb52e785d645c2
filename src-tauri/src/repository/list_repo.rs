//! SQLite List Repository
//!
//! Positional element storage on top of the `elements` table.

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::ListRepository;
use crate::domain::{DomainError, DomainResult, Element, Index, Status};

pub struct SqliteListRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteListRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

fn count(conn: &Connection) -> DomainResult<usize> {
    let len: i64 = conn.query_row("SELECT COUNT(*) FROM elements", [], |row| row.get(0))?;
    Ok(len as usize)
}

#[async_trait]
impl ListRepository for SqliteListRepository {
    async fn list_all(&self) -> DomainResult<Vec<Element>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT title, status FROM elements ORDER BY position")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

        let mut elements = Vec::new();
        for row in rows {
            let (title, status) = row?;
            let status = Status::parse(&status)
                .ok_or_else(|| DomainError::Internal(format!("Unknown status '{}'", status)))?;
            elements.push(Element::new(title, status));
        }
        Ok(elements)
    }

    async fn add_at(&self, idx: Index, elem: &Element) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let len = count(&tx)?;
        if len < idx {
            return Err(DomainError::IndexOutOfBounds { index: idx, len });
        }

        tx.execute(
            "UPDATE elements SET position = position + 1 WHERE position >= ?1",
            params![idx as i64],
        )?;
        tx.execute(
            "INSERT INTO elements (position, title, status) VALUES (?1, ?2, ?3)",
            params![idx as i64, elem.title, elem.status.as_str()],
        )?;
        tx.commit()?;

        log::info!("Added element at {} (len {})", idx, len + 1);
        Ok(())
    }

    async fn update_at(&self, idx: Index, elem: &Element) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let len = count(&conn)?;
        if len <= idx {
            return Err(DomainError::IndexOutOfBounds { index: idx, len });
        }

        conn.execute(
            "UPDATE elements SET title = ?1, status = ?2 WHERE position = ?3",
            params![elem.title, elem.status.as_str(), idx as i64],
        )?;

        log::info!("Updated element at {}", idx);
        Ok(())
    }

    async fn remove_at(&self, idx: Index) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let len = count(&tx)?;
        if len <= idx {
            return Err(DomainError::IndexOutOfBounds { index: idx, len });
        }

        tx.execute("DELETE FROM elements WHERE position = ?1", params![idx as i64])?;
        tx.execute(
            "UPDATE elements SET position = position - 1 WHERE position > ?1",
            params![idx as i64],
        )?;
        tx.commit()?;

        log::info!("Removed element at {} (len {})", idx, len - 1);
        Ok(())
    }
}
