//! Shared view-model plumbing: one-shot UI events and loading guards.

use crate::model::reminder::ValidationError;
use tokio::sync::{broadcast, watch};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Navigation request for the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Leave the current screen.
    Back,
}

/// One-shot signal consumed by the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ShowToast(String),
    ShowSnackBar(String),
    ShowValidationError(ValidationError),
    Navigate(NavigationCommand),
}

/// Fan-out channel for `UiEvent`s.
pub(crate) struct UiEvents {
    tx: broadcast::Sender<UiEvent>,
}

impl UiEvents {
    pub(crate) fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.tx.subscribe()
    }

    pub(crate) fn emit(&self, event: UiEvent) {
        // Events emitted with nobody subscribed are dropped.
        let _ = self.tx.send(event);
    }
}

/// Sets a loading flag on creation and clears it when dropped.
pub(crate) struct LoadingGuard<'a, T> {
    state: &'a watch::Sender<T>,
    clear: fn(&mut T),
}

impl<'a, T> LoadingGuard<'a, T> {
    pub(crate) fn begin(state: &'a watch::Sender<T>, set: fn(&mut T), clear: fn(&mut T)) -> Self {
        state.send_modify(set);
        Self { state, clear }
    }
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.state.send_modify(self.clear);
    }
}
