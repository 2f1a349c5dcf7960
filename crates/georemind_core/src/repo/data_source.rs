//! Reminder data-source contract.
//!
//! # Responsibility
//! - Declare the four reminder operations shared by every source.
//! - Define the error taxonomy returned through `DataResult`.
//!
//! # Invariants
//! - `get_reminders` reports any store failure as `RemindersNotFound`.
//! - `get_reminder` reports absent or blank ids as `ReminderNotFound`.
//! - Sources perform no validation on writes.

use crate::db::DbError;
use crate::model::reminder::Reminder;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type DataResult<T> = Result<T, DataSourceError>;

/// Low-level reason a store could not serve a call.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// A previous holder panicked while owning the connection.
    LockPoisoned,
    /// The blocking storage task was cancelled or panicked.
    TaskAborted(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::LockPoisoned => f.write_str("reminder store connection lock is poisoned"),
            Self::TaskAborted(details) => write!(f, "reminder store task aborted: {details}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::LockPoisoned | Self::TaskAborted(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Error variant of every data-source operation.
#[derive(Debug)]
pub enum DataSourceError {
    /// Requested id is absent or malformed.
    ReminderNotFound { id: String },
    /// Listing failed because the store reported an error.
    RemindersNotFound(StoreError),
    /// Store could not serve a single-record read or a write.
    StoreUnavailable(StoreError),
}

impl DataSourceError {
    /// Human-readable message shown directly by the UI.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Optional numeric code; the SQLite extended result code when known.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::ReminderNotFound { .. } => None,
            Self::RemindersNotFound(StoreError::Db(err))
            | Self::StoreUnavailable(StoreError::Db(err)) => err.sqlite_code(),
            Self::RemindersNotFound(_) | Self::StoreUnavailable(_) => None,
        }
    }
}

impl Display for DataSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReminderNotFound { .. } => f.write_str("Reminder not found!"),
            Self::RemindersNotFound(_) => f.write_str("Reminders not found!"),
            Self::StoreUnavailable(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DataSourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReminderNotFound { .. } => None,
            Self::RemindersNotFound(err) | Self::StoreUnavailable(err) => Some(err),
        }
    }
}

/// Asynchronous reminder persistence contract.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    /// Snapshot of every stored reminder in storage order.
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>>;
    /// Inserts or overwrites the reminder with the same id.
    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()>;
    /// Loads one reminder by id.
    async fn get_reminder(&self, id: &str) -> DataResult<Reminder>;
    /// Removes every reminder. Idempotent.
    async fn delete_all_reminders(&self) -> DataResult<()>;
}

#[async_trait]
impl<T: ReminderDataSource + ?Sized> ReminderDataSource for Arc<T> {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        (**self).get_reminders().await
    }

    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()> {
        (**self).save_reminder(reminder).await
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        (**self).get_reminder(id).await
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        (**self).delete_all_reminders().await
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSourceError, StoreError};
    use crate::db::DbError;

    #[test]
    fn not_found_messages_match_ui_strings() {
        let single = DataSourceError::ReminderNotFound {
            id: "randomId".to_string(),
        };
        assert_eq!(single.message(), "Reminder not found!");
        assert_eq!(single.code(), None);

        let list = DataSourceError::RemindersNotFound(StoreError::LockPoisoned);
        assert_eq!(list.message(), "Reminders not found!");
    }

    #[test]
    fn store_unavailable_uses_store_message() {
        let err = DataSourceError::StoreUnavailable(StoreError::Db(
            DbError::MissingRequiredTable("reminders"),
        ));
        assert_eq!(err.message(), "missing required table `reminders`");
        assert_eq!(err.code(), None);
    }
}
