//! FFI use-case API for the mobile UI shell.
//!
//! # Responsibility
//! - Expose reminder list/save/lookup flows as sync, use-case-level calls.
//! - Translate view-model state and events into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Geofence registration stays with the caller; responses only describe it.

use georemind_core::db::open_db;
use georemind_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_from_config, ping as ping_inner, CoreConfig, GeofenceExpiration, GeofenceRequest,
    GeofenceTransition, ReminderDataItem, ReminderDataSource, RemindersListViewModel,
    RemindersRepository, SaveReminderViewModel, SqliteReminderDataSource, UiEvent,
};
use log::warn;
use std::future::Future;
use std::path::Path;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};

static CONFIG: OnceLock<CoreConfig> = OnceLock::new();
static RUNTIME: OnceLock<Result<Runtime, String>> = OnceLock::new();

type Repository = RemindersRepository<SqliteReminderDataSource>;

/// Minimal health-check API for bridge smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Initializes logging from `GEOREMIND_LOG_*` variables; no-op when unset.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_from_env() -> String {
    match init_logging_from_config(config()) {
        Ok(_) => String::new(),
        Err(err) => err,
    }
}

/// Reminder row as shown by the list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderItem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Geofence the shell must register after a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceSpec {
    pub request_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f32,
    /// `"never"`: the region stays registered until removed.
    pub expiration: String,
    /// `"enter"`: fire when the device enters the region.
    pub transition: String,
    /// Transition that fires right away when already inside the region.
    pub initial_trigger: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListResponse {
    pub ok: bool,
    pub items: Vec<ReminderItem>,
    pub show_no_data: bool,
    /// Error text on failure, empty otherwise.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSaveResponse {
    pub ok: bool,
    pub reminder_id: Option<String>,
    /// Toast, validation or store message, ready for display.
    pub message: String,
    /// True when the shell should leave the save screen.
    pub navigate_back: bool,
    pub geofence: Option<GeofenceSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderGetResponse {
    pub ok: bool,
    pub item: Option<ReminderItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

/// Loads every reminder for the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_load() -> ReminderListResponse {
    reminders_load_at(&config().db_path)
}

/// Validates and saves one reminder entered on the save screen.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_save(
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ReminderSaveResponse {
    let candidate = ReminderDataItem::new(title, description, location, latitude, longitude);
    reminder_save_at(&config().db_path, candidate)
}

/// Looks up the reminder behind a fired geofence.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_get(id: String) -> ReminderGetResponse {
    reminder_get_at(&config().db_path, &id)
}

#[flutter_rust_bridge::frb(sync)]
pub fn reminders_delete_all() -> ActionResponse {
    reminders_delete_all_at(&config().db_path)
}

fn reminders_load_at(db_path: &Path) -> ReminderListResponse {
    let outcome = run_with_repository(db_path, |repository| async move {
        let view_model = RemindersListViewModel::new(repository);
        view_model.load_reminders().await;
        view_model.state()
    });

    match outcome {
        Ok(state) => ReminderListResponse {
            ok: state.error_message.is_none(),
            items: state.reminders.into_iter().map(to_reminder_item).collect(),
            show_no_data: state.show_no_data,
            message: state.error_message.unwrap_or_default(),
        },
        Err(err) => ReminderListResponse {
            ok: false,
            items: Vec::new(),
            show_no_data: true,
            message: format!("reminders_load failed: {err}"),
        },
    }
}

fn reminder_save_at(db_path: &Path, candidate: ReminderDataItem) -> ReminderSaveResponse {
    let reminder_id = candidate.id.clone();
    let outcome = run_with_repository(db_path, |repository| async move {
        let view_model = SaveReminderViewModel::new(repository);
        let mut events = view_model.subscribe_events();
        let geofence = view_model.validate_and_save_reminder(&candidate).await;

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }
        (geofence, received)
    });

    let (geofence, events) = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            return ReminderSaveResponse {
                ok: false,
                reminder_id: None,
                message: format!("reminder_save failed: {err}"),
                navigate_back: false,
                geofence: None,
            };
        }
    };

    let mut response = ReminderSaveResponse {
        ok: false,
        reminder_id: None,
        message: String::new(),
        navigate_back: false,
        geofence: geofence.map(to_geofence_spec),
    };
    for event in events {
        match event {
            UiEvent::ShowToast(message) => {
                response.ok = true;
                response.reminder_id = Some(reminder_id.clone());
                response.message = message;
            }
            UiEvent::ShowSnackBar(message) => response.message = message,
            UiEvent::ShowValidationError(err) => response.message = err.message().to_string(),
            UiEvent::Navigate(_) => response.navigate_back = true,
        }
    }
    response
}

fn reminder_get_at(db_path: &Path, id: &str) -> ReminderGetResponse {
    let id = id.to_string();
    let outcome = run_with_repository(db_path, |repository| async move {
        repository.get_reminder(&id).await
    });

    match outcome {
        Ok(Ok(reminder)) => ReminderGetResponse {
            ok: true,
            item: Some(to_reminder_item(reminder.into())),
            message: String::new(),
        },
        Ok(Err(err)) => ReminderGetResponse {
            ok: false,
            item: None,
            message: err.message(),
        },
        Err(err) => ReminderGetResponse {
            ok: false,
            item: None,
            message: format!("reminder_get failed: {err}"),
        },
    }
}

fn reminders_delete_all_at(db_path: &Path) -> ActionResponse {
    let outcome = run_with_repository(db_path, |repository| async move {
        repository.delete_all_reminders().await
    });

    match outcome {
        Ok(Ok(())) => ActionResponse {
            ok: true,
            message: "Reminders deleted.".to_string(),
        },
        Ok(Err(err)) => ActionResponse {
            ok: false,
            message: err.message(),
        },
        Err(err) => ActionResponse {
            ok: false,
            message: format!("reminders_delete_all failed: {err}"),
        },
    }
}

fn config() -> &'static CoreConfig {
    CONFIG.get_or_init(CoreConfig::from_env)
}

fn runtime() -> Result<&'static Runtime, String> {
    RUNTIME
        .get_or_init(|| {
            Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("georemind-core")
                .build()
                .map_err(|err| format!("runtime start failed: {err}"))
        })
        .as_ref()
        .map_err(Clone::clone)
}

fn run_with_repository<T, F, Fut>(db_path: &Path, f: F) -> Result<T, String>
where
    F: FnOnce(Repository) -> Fut,
    Fut: Future<Output = T>,
{
    let runtime = runtime()?;
    let conn = open_db(db_path).map_err(|err| format!("reminder DB open failed: {err}"))?;
    let source = SqliteReminderDataSource::try_new(conn).map_err(|err| {
        warn!("event=ffi_open module=ffi status=error error={err}");
        format!("reminder store init failed: {err}")
    })?;
    Ok(runtime.block_on(f(RemindersRepository::new(source))))
}

fn to_reminder_item(item: ReminderDataItem) -> ReminderItem {
    ReminderItem {
        id: item.id,
        title: item.title,
        description: item.description,
        location: item.location,
        latitude: item.latitude,
        longitude: item.longitude,
    }
}

fn to_geofence_spec(request: GeofenceRequest) -> GeofenceSpec {
    GeofenceSpec {
        request_id: request.request_id,
        latitude: request.latitude,
        longitude: request.longitude,
        radius_meters: request.radius_meters,
        expiration: expiration_name(request.expiration).to_string(),
        transition: transition_name(request.transition).to_string(),
        initial_trigger: transition_name(request.initial_trigger).to_string(),
    }
}

fn expiration_name(expiration: GeofenceExpiration) -> &'static str {
    match expiration {
        GeofenceExpiration::Never => "never",
    }
}

fn transition_name(transition: GeofenceTransition) -> &'static str {
    match transition {
        GeofenceTransition::Enter => "enter",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, reminder_get_at, reminder_save_at,
        reminders_delete_all_at, reminders_load_at,
    };
    use georemind_core::{ReminderDataItem, GEOFENCE_RADIUS_IN_METERS};

    fn item(title: &str, location: Option<&str>) -> ReminderDataItem {
        ReminderDataItem::new(
            Some(title.to_string()),
            Some("Description1".to_string()),
            location.map(str::to_string),
            Some(36.0),
            Some(119.0),
        )
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn save_then_load_and_lookup_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("reminders.db");

        let empty = reminders_load_at(&db_path);
        assert!(empty.ok);
        assert!(empty.show_no_data);

        let saved = reminder_save_at(&db_path, item("Title1", Some("California")));
        assert!(saved.ok, "{}", saved.message);
        assert!(saved.navigate_back);
        let reminder_id = saved.reminder_id.expect("saved reminder id");
        let geofence = saved.geofence.expect("geofence for saved reminder");
        assert_eq!(geofence.request_id, reminder_id);
        assert_eq!(geofence.radius_meters, GEOFENCE_RADIUS_IN_METERS);
        assert_eq!(geofence.expiration, "never");
        assert_eq!(geofence.transition, "enter");
        assert_eq!(geofence.initial_trigger, "enter");

        let listed = reminders_load_at(&db_path);
        assert!(!listed.show_no_data);
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].id, reminder_id);

        let found = reminder_get_at(&db_path, &reminder_id);
        assert!(found.ok);
        assert_eq!(
            found.item.and_then(|item| item.location).as_deref(),
            Some("California")
        );
    }

    #[test]
    fn validation_failure_is_reported_without_geofence() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("reminders.db");

        let response = reminder_save_at(&db_path, item("Title1", None));
        assert!(!response.ok);
        assert!(!response.navigate_back);
        assert_eq!(response.message, "select a location");
        assert!(response.geofence.is_none());
        assert!(reminders_load_at(&db_path).items.is_empty());
    }

    #[test]
    fn delete_all_then_lookup_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("reminders.db");
        let saved = reminder_save_at(&db_path, item("Title1", Some("California")));
        let reminder_id = saved.reminder_id.expect("saved reminder id");

        let deleted = reminders_delete_all_at(&db_path);
        assert!(deleted.ok);

        let missing = reminder_get_at(&db_path, &reminder_id);
        assert!(!missing.ok);
        assert_eq!(missing.message, "Reminder not found!");
    }
}
