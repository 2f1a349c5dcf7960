//! Core domain logic for GeoRemind location reminders.
//! This crate is the single source of truth for reminder storage and save rules.

pub mod config;
pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod repo;
pub mod viewmodel;

pub use config::CoreConfig;
pub use geofence::{
    GeofenceExpiration, GeofenceRequest, GeofenceTransition, GEOFENCE_RADIUS_IN_METERS,
};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::reminder::{new_reminder_id, Reminder, ReminderDataItem, ReminderId, ValidationError};
pub use repo::data_source::{DataResult, DataSourceError, ReminderDataSource, StoreError};
pub use repo::reminders_repository::RemindersRepository;
pub use repo::sqlite_data_source::SqliteReminderDataSource;
pub use viewmodel::base::{NavigationCommand, UiEvent};
pub use viewmodel::reminders_list::{ReminderListState, RemindersListViewModel};
pub use viewmodel::save_reminder::{ReminderForm, SaveReminderViewModel, REMINDER_SAVED_MESSAGE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
