#![allow(dead_code)]

use async_trait::async_trait;
use georemind_core::{DataResult, DataSourceError, Reminder, ReminderDataSource, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory data source with switchable failure mode.
#[derive(Default)]
pub struct FakeDataSource {
    reminders: Mutex<Vec<Reminder>>,
    return_error: AtomicBool,
    load_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeDataSource {
    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
            ..Self::default()
        }
    }

    pub fn set_return_error(&self, value: bool) {
        self.return_error.store(value, Ordering::SeqCst);
    }

    /// Makes `get_reminders` wait until the returned handle is notified.
    pub fn hold_loads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.load_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn len(&self) -> usize {
        self.reminders.lock().unwrap().len()
    }

    fn failing(&self) -> bool {
        self.return_error.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderDataSource for FakeDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        let gate = self.load_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failing() {
            return Err(DataSourceError::RemindersNotFound(StoreError::TaskAborted(
                "test failure".to_string(),
            )));
        }
        Ok(self.reminders.lock().unwrap().clone())
    }

    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()> {
        if self.failing() {
            return Err(DataSourceError::StoreUnavailable(StoreError::LockPoisoned));
        }
        let mut reminders = self.reminders.lock().unwrap();
        match reminders.iter_mut().find(|stored| stored.id == reminder.id) {
            Some(stored) => *stored = reminder.clone(),
            None => reminders.push(reminder.clone()),
        }
        Ok(())
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        let not_found = || DataSourceError::ReminderNotFound { id: id.to_string() };
        if self.failing() || id.trim().is_empty() {
            return Err(not_found());
        }
        self.reminders
            .lock()
            .unwrap()
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        self.reminders.lock().unwrap().clear();
        Ok(())
    }
}

pub fn reminder(title: &str, description: &str, location: &str, lat: f64, lon: f64) -> Reminder {
    Reminder::new(
        Some(title.to_string()),
        Some(description.to_string()),
        Some(location.to_string()),
        Some(lat),
        Some(lon),
    )
}
