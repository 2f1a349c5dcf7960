//! Save reminder screen state and the validated save flow.
//!
//! # Responsibility
//! - Hold the draft entered on the save and select-location screens.
//! - Validate a candidate reminder, persist it and signal the UI.
//! - Hand a geofence request back to the caller after a successful save.
//!
//! # Invariants
//! - Nothing is persisted when validation fails.
//! - Title is validated before location.
//! - Toast and navigation are emitted only after the store accepted the write.

use crate::geofence::GeofenceRequest;
use crate::model::reminder::{new_reminder_id, Reminder, ReminderDataItem};
use crate::repo::data_source::ReminderDataSource;
use crate::viewmodel::base::{LoadingGuard, NavigationCommand, UiEvent, UiEvents};
use log::{info, warn};
use tokio::sync::{broadcast, watch};

pub const REMINDER_SAVED_MESSAGE: &str = "Reminder Saved !";

/// Draft reminder as edited on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderForm {
    /// Builds a candidate with a fresh id.
    pub fn to_data_item(&self) -> ReminderDataItem {
        ReminderDataItem::new(
            self.title.clone(),
            self.description.clone(),
            self.location.clone(),
            self.latitude,
            self.longitude,
        )
    }
}

/// Save screen view-model: draft state plus the validated save flow.
pub struct SaveReminderViewModel<D: ReminderDataSource> {
    data_source: D,
    form: watch::Sender<ReminderForm>,
    show_loading: watch::Sender<bool>,
    events: UiEvents,
}

impl<D: ReminderDataSource> SaveReminderViewModel<D> {
    /// Creates the view-model with an empty draft.
    pub fn new(data_source: D) -> Self {
        let (form, _) = watch::channel(ReminderForm::default());
        let (show_loading, _) = watch::channel(false);
        Self {
            data_source,
            form,
            show_loading,
            events: UiEvents::new(),
        }
    }

    /// Receiver for toast, snackbar, validation and navigation events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    /// Receiver notified on every draft change.
    pub fn subscribe_form(&self) -> watch::Receiver<ReminderForm> {
        self.form.subscribe()
    }

    /// Current draft snapshot.
    pub fn form(&self) -> ReminderForm {
        self.form.borrow().clone()
    }

    /// True while a save is in flight.
    pub fn show_loading(&self) -> bool {
        *self.show_loading.borrow()
    }

    /// Replaces the draft title.
    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.form.send_modify(|form| form.title = Some(title));
    }

    /// Replaces the draft description.
    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.form
            .send_modify(|form| form.description = Some(description));
    }

    /// Records the place picked on the map.
    pub fn select_location(&self, label: impl Into<String>, latitude: f64, longitude: f64) {
        let label = label.into();
        self.form.send_modify(|form| {
            form.location = Some(label);
            form.latitude = Some(latitude);
            form.longitude = Some(longitude);
        });
    }

    /// Resets the draft, e.g. when the save screen is torn down.
    pub fn on_clear(&self) {
        self.form.send_replace(ReminderForm::default());
    }

    /// Validates and saves the current draft.
    pub async fn save_form(&self) -> Option<GeofenceRequest> {
        let candidate = self.form.borrow().to_data_item();
        self.validate_and_save_reminder(&candidate).await
    }

    /// Validates `candidate` and persists it when valid.
    ///
    /// # Contract
    /// - Invalid input emits `ShowValidationError` and returns `None`.
    /// - A blank id is replaced by a generated one before saving.
    /// - Success emits `ShowToast` then `Navigate(Back)` and returns the
    ///   geofence request the caller should register.
    /// - A store failure emits `ShowSnackBar` and returns `None`.
    pub async fn validate_and_save_reminder(
        &self,
        candidate: &ReminderDataItem,
    ) -> Option<GeofenceRequest> {
        if let Err(err) = candidate.validate() {
            info!("event=reminder_validate module=viewmodel status=rejected reason={err:?}");
            self.events.emit(UiEvent::ShowValidationError(err));
            return None;
        }

        let mut item = candidate.clone();
        if item.id.trim().is_empty() {
            item.id = new_reminder_id();
        }

        let loading = LoadingGuard::begin(
            &self.show_loading,
            |flag| *flag = true,
            |flag| *flag = false,
        );
        let saved = self
            .data_source
            .save_reminder(&Reminder::from(item.clone()))
            .await;
        drop(loading);

        match saved {
            Ok(()) => {
                info!(
                    "event=reminder_save module=viewmodel status=ok id={}",
                    item.id
                );
                self.events
                    .emit(UiEvent::ShowToast(REMINDER_SAVED_MESSAGE.to_string()));
                self.events
                    .emit(UiEvent::Navigate(NavigationCommand::Back));
                GeofenceRequest::for_reminder(&item)
            }
            Err(err) => {
                warn!(
                    "event=reminder_save module=viewmodel status=error id={} error={}",
                    item.id, err
                );
                self.events.emit(UiEvent::ShowSnackBar(err.message()));
                None
            }
        }
    }
}
