//! Repository seam between view-models and reminder data sources.
//!
//! # Responsibility
//! - Expose the reminder operations to view-models.
//! - Allow swapping the backing source without touching callers.
//!
//! # Invariants
//! - Every call is forwarded 1:1; results are returned unchanged.

use crate::model::reminder::Reminder;
use crate::repo::data_source::{DataResult, ReminderDataSource};
use async_trait::async_trait;
use log::debug;

/// Pass-through repository over one local data source.
pub struct RemindersRepository<D: ReminderDataSource> {
    local: D,
}

impl<D: ReminderDataSource> RemindersRepository<D> {
    /// Creates a repository using the provided local data source.
    pub fn new(local: D) -> Self {
        Self { local }
    }

    /// Returns the wrapped local data source.
    pub fn local(&self) -> &D {
        &self.local
    }
}

#[async_trait]
impl<D: ReminderDataSource> ReminderDataSource for RemindersRepository<D> {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        debug!("event=repo_call module=repo op=get_reminders");
        self.local.get_reminders().await
    }

    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()> {
        debug!("event=repo_call module=repo op=save_reminder");
        self.local.save_reminder(reminder).await
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        debug!("event=repo_call module=repo op=get_reminder");
        self.local.get_reminder(id).await
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        debug!("event=repo_call module=repo op=delete_all_reminders");
        self.local.delete_all_reminders().await
    }
}
