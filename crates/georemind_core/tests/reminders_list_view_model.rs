mod common;

use common::{reminder, FakeDataSource};
use georemind_core::db::open_db_in_memory;
use georemind_core::{
    ReminderDataSource, ReminderListState, RemindersListViewModel, SqliteReminderDataSource,
    UiEvent,
};
use std::sync::Arc;

fn seeded_fake() -> Arc<FakeDataSource> {
    Arc::new(FakeDataSource::with_reminders(vec![
        reminder("Title1", "Description1", "California", 36.0, 119.0),
        reminder("Title2", "Description2", "New York", 40.0, 74.0),
    ]))
}

#[test]
fn initial_state_is_empty_and_idle() {
    let view_model = RemindersListViewModel::new(seeded_fake());
    assert_eq!(view_model.state(), ReminderListState::default());
}

#[tokio::test]
async fn load_shows_single_stored_reminder() {
    let stored = reminder("Title1", "Description1", "California", 36.0, 119.0);
    let fake = Arc::new(FakeDataSource::with_reminders(vec![stored.clone()]));
    let view_model = RemindersListViewModel::new(fake);

    view_model.load_reminders().await;

    let state = view_model.state();
    assert_eq!(state.reminders.len(), 1);
    let item = &state.reminders[0];
    assert_eq!(item.id, stored.id);
    assert_eq!(item.title.as_deref(), Some("Title1"));
    assert_eq!(item.description.as_deref(), Some("Description1"));
    assert_eq!(item.location.as_deref(), Some("California"));
    assert_eq!(item.latitude, Some(36.0));
    assert_eq!(item.longitude, Some(119.0));
    assert!(!state.show_no_data);
    assert!(!state.show_loading);
    assert_eq!(state.error_message, None);
}

#[tokio::test]
async fn load_picks_up_newly_saved_reminder() {
    let fake = seeded_fake();
    let view_model = RemindersListViewModel::new(Arc::clone(&fake));

    fake.save_reminder(&reminder("Title3", "Description3", "New York", 40.0, 74.0))
        .await
        .unwrap();
    view_model.load_reminders().await;

    assert_eq!(view_model.state().reminders.len(), 3);
}

#[tokio::test]
async fn empty_store_sets_no_data() {
    let source = SqliteReminderDataSource::try_new(open_db_in_memory().unwrap()).unwrap();
    let view_model = RemindersListViewModel::new(source);

    view_model.load_reminders().await;

    let state = view_model.state();
    assert!(state.reminders.is_empty());
    assert!(state.show_no_data);
    assert!(!state.show_loading);
}

#[tokio::test]
async fn failed_load_reports_error_and_clears_list() {
    let fake = seeded_fake();
    let view_model = RemindersListViewModel::new(Arc::clone(&fake));
    let mut events = view_model.subscribe_events();

    view_model.load_reminders().await;
    assert_eq!(view_model.state().reminders.len(), 2);

    fake.set_return_error(true);
    view_model.load_reminders().await;

    let state = view_model.state();
    assert_eq!(state.error_message.as_deref(), Some("Reminders not found!"));
    assert!(state.show_no_data);
    assert!(state.reminders.is_empty());
    assert!(!state.show_loading);
    assert_eq!(
        events.try_recv().ok(),
        Some(UiEvent::ShowSnackBar("Reminders not found!".to_string()))
    );
}

#[tokio::test]
async fn successful_load_after_failure_clears_error() {
    let fake = seeded_fake();
    let view_model = RemindersListViewModel::new(Arc::clone(&fake));

    fake.set_return_error(true);
    view_model.load_reminders().await;
    fake.set_return_error(false);
    view_model.load_reminders().await;

    let state = view_model.state();
    assert_eq!(state.error_message, None);
    assert_eq!(state.reminders.len(), 2);
    assert!(!state.show_no_data);
}

#[tokio::test]
async fn loading_flag_is_visible_while_load_is_in_flight() {
    let fake = seeded_fake();
    let gate = fake.hold_loads();
    let view_model = Arc::new(RemindersListViewModel::new(Arc::clone(&fake)));
    let mut state = view_model.subscribe();

    let load = tokio::spawn({
        let view_model = Arc::clone(&view_model);
        async move { view_model.load_reminders().await }
    });

    state.wait_for(|current| current.show_loading).await.unwrap();
    assert!(view_model.state().reminders.is_empty());

    gate.notify_one();
    load.await.unwrap();

    let finished = view_model.state();
    assert!(!finished.show_loading);
    assert_eq!(finished.reminders.len(), 2);
}

#[tokio::test]
async fn abandoned_load_does_not_leave_loading_set() {
    let fake = seeded_fake();
    let _gate = fake.hold_loads();
    let view_model = RemindersListViewModel::new(Arc::clone(&fake));

    let timed_out = tokio::time::timeout(
        std::time::Duration::from_millis(20),
        view_model.load_reminders(),
    )
    .await;

    assert!(timed_out.is_err());
    assert!(!view_model.state().show_loading);
}
