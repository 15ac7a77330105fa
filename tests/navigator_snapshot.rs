mod common;

use common::{create_new_job, enter_time, navigator};
use flyout_nav::navigator::{SavedSession, Section, Snapshot, SnapshotMap, ViewModelType};
use serde_json::json;

#[test]
fn capture_with_nothing_shown_is_empty() {
    let mut nav = navigator();
    assert!(nav.capture_snapshot().is_empty());
    nav.restore_snapshot(&SnapshotMap::new());
    assert_eq!(nav.active_section(), None);
    assert_eq!(nav.screens().count(), 0);
}

#[test]
fn capture_includes_every_live_view_model() {
    let mut nav = navigator();
    nav.show(&enter_time()).unwrap();
    nav.show(&create_new_job()).unwrap();

    let snapshot = nav.capture_snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(
        snapshot.get(Section::EnterTime).unwrap().state,
        json!({ "load": 1 })
    );
    assert_eq!(
        nav.screen(Section::CreateNewJob).unwrap().snapshot(),
        snapshot.get(Section::CreateNewJob)
    );
}

#[test]
fn capture_reflects_edits() {
    let mut nav = navigator();
    nav.show(&enter_time()).unwrap();
    nav.view_model_mut(Section::EnterTime)
        .unwrap()
        .state_mut()["hours"] = json!(7);

    let snapshot = nav.capture_snapshot();
    assert_eq!(
        snapshot.get(Section::EnterTime).unwrap().state,
        json!({ "load": 1, "hours": 7 })
    );
}

#[test]
fn restore_into_fresh_navigator_round_trips() {
    let mut nav = navigator();
    nav.show(&enter_time()).unwrap();
    nav.show(&create_new_job()).unwrap();
    let snapshot = nav.capture_snapshot();

    let mut fresh = navigator();
    fresh.restore_snapshot(&snapshot);

    for section in Section::all() {
        assert_eq!(
            fresh.screen(*section).unwrap().view_model(),
            nav.screen(*section).unwrap().view_model()
        );
    }
    assert_eq!(fresh.loader().load_count(), 0);
    assert_eq!(fresh.active_section(), None);
}

#[test]
fn round_trip_through_json() {
    let mut nav = navigator();
    nav.show(&create_new_job()).unwrap();
    let encoded = serde_json::to_string(&nav.capture_snapshot()).unwrap();

    let decoded: SnapshotMap = serde_json::from_str(&encoded).unwrap();
    let mut fresh = navigator();
    fresh.restore_snapshot(&decoded);

    assert_eq!(
        fresh
            .screen(Section::CreateNewJob)
            .unwrap()
            .view_model()
            .unwrap()
            .state(),
        &json!({ "load": 1 })
    );
}

#[test]
fn restore_never_overwrites_live_view_model() {
    let mut nav = navigator();
    nav.show(&enter_time()).unwrap();

    let mut stale = SnapshotMap::new();
    stale.insert(
        Section::EnterTime,
        Snapshot {
            view_model_type: ViewModelType::new("EnterTimeViewModel"),
            state: json!({ "hours": 99 }),
        },
    );
    stale.insert(
        Section::CreateNewJob,
        Snapshot {
            view_model_type: ViewModelType::new("CreateNewJobViewModel"),
            state: json!({ "name": "Shed" }),
        },
    );
    nav.restore_snapshot(&stale);

    assert_eq!(
        nav.screen(Section::EnterTime)
            .unwrap()
            .view_model()
            .unwrap()
            .state(),
        &json!({ "load": 1 })
    );
    assert_eq!(
        nav.screen(Section::CreateNewJob)
            .unwrap()
            .view_model()
            .unwrap()
            .state(),
        &json!({ "name": "Shed" })
    );
    assert_eq!(nav.active_section(), Some(Section::EnterTime));
}

#[test]
fn restore_skips_foreign_view_model_type() {
    let mut snapshot = SnapshotMap::new();
    snapshot.insert(
        Section::EnterTime,
        Snapshot {
            view_model_type: ViewModelType::new("CreateNewJobViewModel"),
            state: json!({}),
        },
    );

    let mut nav = navigator();
    nav.restore_snapshot(&snapshot);
    assert!(nav
        .screen(Section::EnterTime)
        .and_then(|s| s.view_model())
        .is_none());
}

#[test]
fn malformed_entries_are_skipped() {
    let raw = json!({
        "enter_time": { "view_model": "EnterTimeViewModel", "state": { "hours": 3 } },
        "create_new_job": 42,
        "reports": { "view_model": "ReportsViewModel" }
    });
    let snapshot: SnapshotMap = serde_json::from_value(raw).unwrap();

    let mut nav = navigator();
    nav.restore_snapshot(&snapshot);

    assert!(nav.screen(Section::EnterTime).unwrap().view_model().is_some());
    assert!(nav.screen(Section::CreateNewJob).is_none());
}

#[test]
fn save_session_records_active_section_and_title() {
    let mut nav = navigator();
    assert_eq!(nav.save_session(), SavedSession::default());

    nav.show(&create_new_job()).unwrap();
    let session = nav.save_session();
    assert_eq!(session.active, Some(Section::CreateNewJob));
    assert_eq!(session.title.as_deref(), Some("Create New Job"));
    assert_eq!(session.screens.len(), 1);
}
