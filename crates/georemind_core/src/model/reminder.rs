//! Reminder record and display item.
//!
//! # Responsibility
//! - Define the storage-facing `Reminder` and the view-facing
//!   `ReminderDataItem`.
//! - Validate a candidate reminder before persistence.
//!
//! # Invariants
//! - `id` is generated once and never rewritten after persistence.
//! - Storage accepts partially filled reminders; only `validate()` gates saves.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a reminder. Also used as the geofence request id.
pub type ReminderId = String;

/// Generates a fresh reminder identifier.
pub fn new_reminder_id() -> ReminderId {
    Uuid::new_v4().to_string()
}

/// Persisted reminder row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable label of the selected place.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a generated id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: new_reminder_id(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }
}

/// View-facing projection of a reminder.
///
/// Produced fresh on each list load and built from user input on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDataItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub id: ReminderId,
}

impl ReminderDataItem {
    /// Creates a display item with a generated id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            title,
            description,
            location,
            latitude,
            longitude,
            id: new_reminder_id(),
        }
    }

    /// Checks the fields required to save and register a reminder.
    ///
    /// # Contract
    /// - Title is checked first, so a missing title wins over a missing location.
    /// - A location needs both a non-blank label and a full coordinate pair.
    /// - Description is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(self.title.as_deref()) {
            return Err(ValidationError::MissingTitle);
        }
        if is_blank(self.location.as_deref()) || self.coordinates().is_none() {
            return Err(ValidationError::MissingLocation);
        }
        Ok(())
    }

    /// Returns `(latitude, longitude)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl From<Reminder> for ReminderDataItem {
    fn from(value: Reminder) -> Self {
        Self {
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
            id: value.id,
        }
    }
}

impl From<ReminderDataItem> for Reminder {
    fn from(value: ReminderDataItem) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Save-time validation failure. Surfaced to the UI, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingLocation,
}

impl ValidationError {
    /// User-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingTitle => "enter a title",
            Self::MissingLocation => "select a location",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}
