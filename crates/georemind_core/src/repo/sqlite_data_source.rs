//! SQLite-backed reminder data source.
//!
//! # Responsibility
//! - Provide the `ReminderDataSource` operations over the `reminders` table.
//! - Run every statement on the blocking pool so callers never block.
//!
//! # Invariants
//! - One connection, guarded by a mutex: at most one statement runs at a time.
//! - Upserts keep the original row position, so list order is insertion order.
//! - Rows are read back as stored; no validation on either path.

use crate::db::migrations::ensure_reminders_ready;
use crate::db::DbResult;
use crate::model::reminder::Reminder;
use crate::repo::data_source::{DataResult, DataSourceError, ReminderDataSource, StoreError};
use async_trait::async_trait;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

/// Reminder data source over a migrated SQLite connection.
pub struct SqliteReminderDataSource {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteReminderDataSource {
    /// Takes ownership of a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` for foreign schemas.
    pub fn try_new(conn: Connection) -> DbResult<Self> {
        ensure_reminders_ready(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_connection<T, F>(&self, op: &'static str, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> DbResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let task = tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::LockPoisoned)?;
            f(&*guard).map_err(StoreError::from)
        });

        let result = match task.await {
            Ok(result) => result,
            Err(err) => Err(StoreError::TaskAborted(err.to_string())),
        };
        if let Err(err) = &result {
            warn!("event=reminder_store module=repo status=error op={op} error={err}");
        }
        result
    }
}

#[async_trait]
impl ReminderDataSource for SqliteReminderDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        let reminders = self
            .with_connection("get_reminders", |conn| {
                let mut stmt =
                    conn.prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;
                let mut rows = stmt.query([])?;
                let mut reminders = Vec::new();
                while let Some(row) = rows.next()? {
                    reminders.push(parse_reminder_row(row)?);
                }
                Ok(reminders)
            })
            .await
            .map_err(DataSourceError::RemindersNotFound)?;

        debug!(
            "event=reminder_list module=repo status=ok count={}",
            reminders.len()
        );
        Ok(reminders)
    }

    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()> {
        let reminder = reminder.clone();
        let id = reminder.id.clone();
        self.with_connection("save_reminder", move |conn| {
            conn.execute(
                "INSERT INTO reminders (
                    id,
                    title,
                    description,
                    location,
                    latitude,
                    longitude
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    description = excluded.description,
                    location = excluded.location,
                    latitude = excluded.latitude,
                    longitude = excluded.longitude;",
                params![
                    reminder.id.as_str(),
                    reminder.title.as_deref(),
                    reminder.description.as_deref(),
                    reminder.location.as_deref(),
                    reminder.latitude,
                    reminder.longitude,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(DataSourceError::StoreUnavailable)?;

        debug!("event=reminder_save module=repo status=ok id={id}");
        Ok(())
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        let id = id.to_string();
        if id.trim().is_empty() {
            return Err(DataSourceError::ReminderNotFound { id });
        }

        let lookup_id = id.clone();
        let found = self
            .with_connection("get_reminder", move |conn| {
                let reminder = conn
                    .query_row(
                        &format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"),
                        [lookup_id.as_str()],
                        parse_reminder_row,
                    )
                    .optional()?;
                Ok(reminder)
            })
            .await
            .map_err(DataSourceError::StoreUnavailable)?;

        found.ok_or(DataSourceError::ReminderNotFound { id })
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        let removed = self
            .with_connection("delete_all_reminders", |conn| {
                Ok(conn.execute("DELETE FROM reminders;", [])?)
            })
            .await
            .map_err(DataSourceError::StoreUnavailable)?;

        debug!("event=reminder_clear module=repo status=ok removed={removed}");
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> rusqlite::Result<Reminder> {
    Ok(Reminder {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
