use shiftdesk::api::ApiClient;
use shiftdesk::core::refetch::{Mutation, View};
use shiftdesk::core::tracking::{TrackingAction, TrackingPanel, check_clock_in, clock_in_candidates};
use shiftdesk::errors::AppError;
use shiftdesk::models::time_record::TimeRecord;
use shiftdesk::models::worker::Worker;
use shiftdesk::session::Session;
use std::sync::Arc;

mod common;
use common::MockBackend;

fn workers() -> Vec<Worker> {
    (1..=3)
        .map(|id| serde_json::from_value(common::worker(id)).unwrap())
        .collect()
}

fn active() -> Vec<TimeRecord> {
    common::active_records()
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect()
}

#[test]
fn test_worker_with_open_record_is_never_a_candidate() {
    let workers = workers();
    let records: Vec<TimeRecord> = active().into_iter().filter(|r| r.worker_id == 1).collect();

    let ids: Vec<i64> = clock_in_candidates(&workers, &records)
        .iter()
        .map(|w| w.id)
        .collect();

    // 1 is clocked in, 3 is inactive
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_closed_records_do_not_block_clock_in() {
    let workers = workers();
    let closed: TimeRecord = serde_json::from_value(common::record(
        5,
        1,
        "2024-06-03T06:00:00",
        Some("2024-06-03T07:00:00"),
    ))
    .unwrap();

    let ids: Vec<i64> = clock_in_candidates(&workers, &[closed])
        .iter()
        .map(|w| w.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_break_toggle_follows_record_state() {
    let records = active();
    let working = records.iter().find(|r| r.id == 10).unwrap();
    let resting = records.iter().find(|r| r.id == 12).unwrap();

    assert_eq!(TrackingAction::break_toggle(working), TrackingAction::StartBreak(10));
    assert_eq!(TrackingAction::break_toggle(resting), TrackingAction::EndBreak(12));
}

#[test]
fn test_actions_declare_stale_views() {
    assert!(TrackingAction::ClockIn(1).mutation().refreshes(View::ActiveRecords));
    assert!(TrackingAction::ClockOut(1).mutation().refreshes(View::Dashboard));
    assert!(!TrackingAction::StartBreak(1).mutation().refreshes(View::Workers));
    assert!(Mutation::SaveShift.invalidates().contains(&View::Shifts));
    assert!(!Mutation::UploadCsv.refreshes(View::Shifts));
}

#[tokio::test]
async fn test_panel_loads_both_lists_and_refuses_clocked_in_workers() {
    let mock = MockBackend::start();
    let api = ApiClient::new(&mock.url, Arc::new(Session::anonymous())).unwrap();

    let panel = TrackingPanel::load(&api).await.unwrap();

    assert_eq!(panel.workers.len(), 2);
    assert_eq!(panel.active.len(), 2);
    assert!(panel.candidates().is_empty());
    assert!(matches!(
        panel.ensure_clockable(1),
        Err(AppError::NotClockable(1))
    ));
    assert!(panel.record(12).unwrap().on_break());

    assert_eq!(mock.hits("GET", "/workers").len(), 1);
    assert_eq!(mock.hits("GET", "/tracking/active").len(), 1);
}

#[tokio::test]
async fn test_worker_past_first_page_can_clock_in() {
    let mock = MockBackend::start();
    mock.set_roster(101);
    let api = ApiClient::new(&mock.url, Arc::new(Session::anonymous())).unwrap();

    check_clock_in(&api, 101).await.unwrap();
    assert_eq!(mock.hits("GET", "/workers/101").len(), 1);
    assert_eq!(mock.hits("GET", "/tracking/worker/101/active").len(), 1);

    let panel = TrackingPanel::load(&api).await.unwrap();
    panel.ensure_clockable(101).unwrap();
    // 101 active workers minus inactive Carol
    assert_eq!(panel.workers.len(), 100);
    let pages: Vec<String> = mock
        .hits("GET", "/workers")
        .into_iter()
        .filter_map(|r| r.query)
        .collect();
    assert_eq!(pages, vec!["skip=0&limit=100", "skip=100&limit=100"]);
}

#[tokio::test]
async fn test_clock_in_check_refuses_open_inactive_and_unknown_workers() {
    let mock = MockBackend::start();
    let api = ApiClient::new(&mock.url, Arc::new(Session::anonymous())).unwrap();

    for id in [1, 3, 404] {
        assert!(matches!(
            check_clock_in(&api, id).await,
            Err(AppError::NotClockable(n)) if n == id
        ));
    }
    check_clock_in(&api, 2).await.unwrap();
    assert!(mock.hits("GET", "/workers").is_empty());
}

#[tokio::test]
async fn test_clock_in_sends_worker_id() {
    let mock = MockBackend::start();
    let api = ApiClient::new(&mock.url, Arc::new(Session::anonymous())).unwrap();

    let record = TrackingAction::ClockIn(2)
        .perform(&api.tracking())
        .await
        .unwrap();

    assert_eq!(record.worker_id, 2);
    assert!(record.is_open());
    let posts = mock.hits("POST", "/tracking/clock-in");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].json(), serde_json::json!({ "worker_id": 2 }));
}
