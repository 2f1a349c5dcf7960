//! Reminder list screen state.
//!
//! # Responsibility
//! - Load every reminder and expose it as display items.
//! - Surface loading, error and empty-list state.
//!
//! # Invariants
//! - `show_loading` is false once `load_reminders` returns or is dropped.
//! - A failed load clears the list and sets `show_no_data`.

use crate::model::reminder::ReminderDataItem;
use crate::repo::data_source::ReminderDataSource;
use crate::viewmodel::base::{LoadingGuard, UiEvent, UiEvents};
use log::{info, warn};
use tokio::sync::{broadcast, watch};

/// Observable state of the reminder list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderListState {
    pub reminders: Vec<ReminderDataItem>,
    pub show_loading: bool,
    /// Message of the last failed load; cleared by a successful one.
    pub error_message: Option<String>,
    pub show_no_data: bool,
}

/// List screen view-model over any reminder data source.
pub struct RemindersListViewModel<D: ReminderDataSource> {
    data_source: D,
    state: watch::Sender<ReminderListState>,
    events: UiEvents,
}

impl<D: ReminderDataSource> RemindersListViewModel<D> {
    /// Creates the view-model with idle, empty state.
    pub fn new(data_source: D) -> Self {
        let (state, _) = watch::channel(ReminderListState::default());
        Self {
            data_source,
            state,
            events: UiEvents::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ReminderListState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ReminderListState> {
        self.state.subscribe()
    }

    /// Receiver for snackbar events raised by failed loads.
    pub fn subscribe_events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    /// Reloads the list from the data source. Never retries.
    pub async fn load_reminders(&self) {
        let _loading = LoadingGuard::begin(
            &self.state,
            |state| state.show_loading = true,
            |state| state.show_loading = false,
        );

        match self.data_source.get_reminders().await {
            Ok(reminders) => {
                info!(
                    "event=reminders_load module=viewmodel status=ok count={}",
                    reminders.len()
                );
                let items = reminders
                    .into_iter()
                    .map(ReminderDataItem::from)
                    .collect::<Vec<_>>();
                self.state.send_modify(|state| {
                    state.show_no_data = items.is_empty();
                    state.reminders = items;
                    state.error_message = None;
                });
            }
            Err(err) => {
                let message = err.message();
                warn!(
                    "event=reminders_load module=viewmodel status=error error={}",
                    message
                );
                self.state.send_modify(|state| {
                    state.reminders.clear();
                    state.error_message = Some(message.clone());
                    state.show_no_data = true;
                });
                self.events.emit(UiEvent::ShowSnackBar(message));
            }
        }
    }
}
