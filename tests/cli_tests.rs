use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{MockBackend, console, shiftdesk, temp_path};

#[test]
fn test_dashboard_shows_cards_and_clocked_in_workers() {
    let mock = MockBackend::start();

    console(&mock, "cli_dashboard")
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Total Workers"))
        .stdout(contains("Currently Clocked In"))
        .stdout(contains("12.2h").or(contains("12.3h")))
        .stdout(contains("Alice Smith"))
        .stdout(contains("on break"));

    assert_eq!(mock.hits("GET", "/tracking/dashboard").len(), 1);
    assert_eq!(mock.hits("GET", "/tracking/active").len(), 1);
}

#[test]
fn test_dashboard_fails_as_a_whole() {
    let mock = MockBackend::start();
    mock.fail("/tracking/active", 500);

    console(&mock, "cli_dashboard_fail")
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(contains("Error: Loading dashboard failed"))
        .stdout(contains("Total Workers").not());
}

#[test]
fn test_calendar_fetches_the_padded_grid() {
    let mock = MockBackend::start();

    console(&mock, "cli_calendar")
        .args(["shifts", "calendar", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("Sun"))
        .stdout(contains("#1 Alice 09:00-17:00"))
        .stdout(contains("#2 Bob 13:00-21:00"))
        .stdout(contains("#3 Alice 08:00-12:00"));

    let query = mock.hits("GET", "/shifts")[0].query.clone().unwrap();
    assert!(query.contains("date_from=2024-05-26"));
    assert!(query.contains("date_to=2024-07-06"));
}

#[test]
fn test_calendar_rejects_bad_month() {
    let mock = MockBackend::start();

    console(&mock, "cli_calendar_bad")
        .args(["shifts", "calendar", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    assert!(mock.requests().is_empty());
}

#[test]
fn test_add_shift_sends_one_create_and_refetches() {
    let mock = MockBackend::start();

    console(&mock, "cli_add_shift")
        .args([
            "shifts", "add", "--worker", "1", "--date", "2024-06-01", "--start", "09:00", "--end",
            "17:00", "--notes", "opening",
        ])
        .assert()
        .success()
        .stdout(contains("Shift 99 saved"))
        .stdout(contains("Shifts on 2024-06-01"))
        .stdout(contains("99"))
        .stdout(contains("opening"));

    let posts = mock.hits("POST", "/shifts");
    assert_eq!(posts.len(), 1);
    let body = posts[0].json();
    assert_eq!(body["start_time"], "2024-06-01T09:00:00");
    assert_eq!(body["end_time"], "2024-06-01T17:00:00");
    assert_eq!(body["notes"], "opening");

    let lists = mock.hits("GET", "/shifts");
    assert_eq!(lists.len(), 1);
    let query = lists[0].query.clone().unwrap();
    assert!(query.contains("date_from=2024-06-01"));
    assert!(query.contains("date_to=2024-06-01"));
    assert!(mock.hits("GET", "/shifts/today").is_empty());
}

#[test]
fn test_delete_shift_refetches_shift_list() {
    let mock = MockBackend::start();

    console(&mock, "cli_del_shift")
        .args(["shifts", "del", "2"])
        .assert()
        .success()
        .stdout(contains("Shift 2 deleted"))
        .stdout(contains("Shifts"));

    assert_eq!(mock.hits("DELETE", "/shifts/2").len(), 1);
    assert_eq!(mock.hits("GET", "/shifts").len(), 1);
    assert!(mock.hits("GET", "/shifts/today").is_empty());
}

#[test]
fn test_add_shift_declined_sends_nothing() {
    let mock = MockBackend::start();

    console(&mock, "cli_add_declined")
        .args([
            "shifts", "add", "--worker", "1", "--date", "2024-06-01", "--start", "09:00", "--end",
            "17:00", "--confirm",
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Cancelled"));

    assert!(mock.requests().is_empty());
}

#[test]
fn test_add_shift_with_reversed_times_fails_without_request() {
    let mock = MockBackend::start();

    console(&mock, "cli_add_reversed")
        .args([
            "shifts", "add", "--worker", "1", "--date", "2024-06-01", "--start", "17:00", "--end",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Error: Saving shift failed"));

    assert!(mock.requests().is_empty());
}

#[test]
fn test_edit_shift_loads_then_updates() {
    let mock = MockBackend::start();

    console(&mock, "cli_edit_shift")
        .args(["shifts", "edit", "1", "--end", "18:00", "--status", "completed"])
        .assert()
        .success();

    assert_eq!(mock.hits("GET", "/shifts/1").len(), 1);
    let puts = mock.hits("PUT", "/shifts/1");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].json()["end_time"], "2024-06-03T18:00:00");
    assert_eq!(puts[0].json()["status"], "completed");
}

#[test]
fn test_edit_shift_no_recurring_clears_pattern() {
    let mock = MockBackend::start();

    console(&mock, "cli_edit_one_off")
        .args(["shifts", "edit", "1", "--no-recurring"])
        .assert()
        .success()
        .stdout(contains("Shifts on 2024-06-03"));

    let body = mock.hits("PUT", "/shifts/1")[0].json();
    assert_eq!(body["is_recurring"], false);
    assert!(body.as_object().unwrap()["recurrence_pattern"].is_null());
}

#[test]
fn test_clock_in_allowed_for_worker_past_first_page() {
    let mock = MockBackend::start();
    mock.set_roster(101);

    console(&mock, "cli_clock_in_101")
        .args(["track", "clock-in", "101"])
        .assert()
        .success()
        .stdout(contains("Worker 101 clocked in"));

    let posts = mock.hits("POST", "/tracking/clock-in");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].json()["worker_id"], 101);
}

#[test]
fn test_clock_in_refused_for_clocked_in_worker() {
    let mock = MockBackend::start();

    console(&mock, "cli_clock_in_refused")
        .args(["track", "clock-in", "1"])
        .assert()
        .failure()
        .stderr(contains("Error: Clock-in failed"));

    assert!(mock.hits("POST", "/tracking/clock-in").is_empty());
}

#[test]
fn test_clock_out_refetches_active_records() {
    let mock = MockBackend::start();

    console(&mock, "cli_clock_out")
        .args(["track", "clock-out", "10"])
        .assert()
        .success()
        .stdout(contains("Record 10 clocked out"))
        .stdout(contains("Currently clocked in"));

    assert_eq!(mock.hits("PUT", "/tracking/clock-out/10").len(), 1);
    assert_eq!(mock.hits("GET", "/tracking/active").len(), 1);
}

#[test]
fn test_break_toggles_on_record_state() {
    let mock = MockBackend::start();

    console(&mock, "cli_break_start")
        .args(["track", "break", "10"])
        .assert()
        .success();
    console(&mock, "cli_break_end")
        .args(["track", "break", "12"])
        .assert()
        .success();

    assert_eq!(mock.hits("PUT", "/tracking/break-start/10").len(), 1);
    assert_eq!(mock.hits("PUT", "/tracking/break-end/12").len(), 1);
    assert!(mock.hits("PUT", "/tracking/break-start/12").is_empty());
}

#[test]
fn test_worker_without_open_record() {
    let mock = MockBackend::start();

    console(&mock, "cli_worker_active")
        .args(["track", "worker", "2"])
        .assert()
        .success()
        .stdout(contains("Worker 2 has no open record"));
}

#[test]
fn test_workers_list_hides_inactive() {
    let mock = MockBackend::start();

    console(&mock, "cli_workers")
        .args(["workers", "list"])
        .assert()
        .success()
        .stdout(contains("Alice Smith"))
        .stdout(contains("Carol White").not());

    console(&mock, "cli_workers_all")
        .args(["workers", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Carol White"));
}

#[test]
fn test_sheets_export_failure_is_coarse() {
    let mock = MockBackend::start();
    mock.fail("/google-sheets/export", 502);

    console(&mock, "cli_sheets_fail")
        .args(["reports", "sheets-export", "--from", "2024-06-01"])
        .assert()
        .failure()
        .stderr(contains("Error: Export failed"));

    assert_eq!(mock.hits("POST", "/google-sheets/export").len(), 1);
}

#[test]
fn test_csv_download_saves_file() {
    let mock = MockBackend::start();
    let dir = std::env::temp_dir().join("shiftdesk_cli_csv");
    fs::remove_dir_all(&dir).ok();

    console(&mock, "cli_csv")
        .args(["reports", "csv", "--dir", &dir.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("time_records_20240603.csv"));

    assert!(dir.join("time_records_20240603.csv").exists());
}

#[test]
fn test_upload_rejects_non_csv() {
    let mock = MockBackend::start();
    let file = temp_path("cli_upload", "txt");
    fs::write(&file, "a,b\n").unwrap();

    console(&mock, "cli_upload")
        .args(["reports", "upload", &file])
        .assert()
        .failure()
        .stderr(contains("Error: CSV upload failed"));

    assert!(mock.requests().is_empty());
}

#[test]
fn test_stored_token_is_sent_and_cleared_on_401() {
    let mock = MockBackend::start();
    let token = temp_path("cli_token", "token");
    let conf = temp_path("cli_token", "conf");
    let base = ["--api-url", mock.url.as_str(), "--token-file", &token, "--config", &conf];

    shiftdesk()
        .args(base)
        .args(["auth", "set-token", "secret-1"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&token).unwrap(), "secret-1");

    shiftdesk()
        .args(base)
        .args(["shifts", "today"])
        .assert()
        .success();
    assert_eq!(
        mock.hits("GET", "/shifts/today")[0].authorization.as_deref(),
        Some("Bearer secret-1")
    );

    mock.fail("/workers", 401);
    shiftdesk()
        .args(base)
        .args(["workers", "list"])
        .assert()
        .failure();
    assert!(!std::path::Path::new(&token).exists());

    shiftdesk()
        .args(base)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(contains("No token stored"));
}

#[test]
fn test_config_print_uses_overrides_file() {
    let conf = temp_path("cli_config", "conf");
    fs::write(&conf, "api_url: http://example.test/api\nupcoming_limit: 3\n").unwrap();

    shiftdesk()
        .env_remove("SHIFTDESK_API_URL")
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://example.test/api"))
        .stdout(contains("upcoming_limit: 3"))
        .stdout(contains("default_sheet_name: Shifts Data"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let conf = temp_path("cli_config_bad", "conf");
    fs::write(&conf, "upcoming_limit: [oops\n").unwrap();

    shiftdesk()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
