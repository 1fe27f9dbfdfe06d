#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub fn shiftdesk() -> Command {
    cargo_bin_cmd!("shiftdesk")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftdesk.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Binary wired to the mock backend with an isolated config and token file.
pub fn console(backend: &MockBackend, name: &str) -> Command {
    let mut cmd = shiftdesk();
    cmd.env_remove("RUST_LOG")
        .env_remove("SHIFTDESK_API_URL")
        .env_remove("SHIFTDESK_TOKEN_FILE")
        .args([
            "--api-url",
            &backend.url,
            "--token-file",
            &temp_path(name, "token"),
            "--config",
            &temp_path(name, "conf"),
        ]);
    cmd
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path without the `/api` prefix.
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub authorization: Option<String>,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<Recorded>>,
    failures: Mutex<HashMap<String, u16>>,
    /// Workers 1..=roster exist.
    roster: AtomicI64,
    /// Shifts accepted by `POST /shifts`.
    created_shifts: Mutex<Vec<Value>>,
}

/// In-process stand-in for the REST backend, bound to an ephemeral port.
pub struct MockBackend {
    pub url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub fn start() -> Self {
        let state = Arc::new(MockState {
            roster: AtomicI64::new(3),
            ..MockState::default()
        });
        let app = Router::new().fallback(route).with_state(state.clone());

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock backend");
        listener.set_nonblocking(true).expect("non-blocking listener");
        let addr = listener.local_addr().expect("mock address");

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .expect("mock runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, app).await.expect("mock server");
            });
        });

        Self {
            url: format!("http://{addr}/api"),
            state,
        }
    }

    /// Answer every request to `path` with `status` from now on.
    pub fn fail(&self, path: &str, status: u16) {
        self.state
            .failures
            .lock()
            .unwrap()
            .insert(path.to_string(), status);
    }

    /// Serve workers 1..=n; ids past 3 are active clerks.
    pub fn set_roster(&self, n: i64) {
        self.state.roster.store(n, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests matching a method and an exact path.
    pub fn hits(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// Requests that change server state.
    pub fn mutations(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != "GET")
            .collect()
    }
}

async fn route(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri
        .path()
        .strip_prefix("/api")
        .unwrap_or(uri.path())
        .to_string();

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        body: body.clone(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let failure = state.failures.lock().unwrap().get(&path).copied();
    if let Some(code) = failure {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({ "detail": "mock failure" }))).into_response();
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let param = |key: &str| query_param(uri.query(), key);
    let roster = state.roster.load(Ordering::SeqCst);

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["workers"]) => {
            let skip: i64 = param("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
            let limit: i64 = param("limit").and_then(|v| v.parse().ok()).unwrap_or(100);
            let page: Vec<Value> = (1..=roster).skip(skip as usize).take(limit as usize).map(worker).collect();
            ok(json!(page))
        }
        ("POST", ["workers"]) => ok(merge(json!({ "id": 4, "is_active": true }), &body)),
        ("GET", ["workers", id]) => match id.parse::<i64>() {
            Ok(n) if (1..=roster).contains(&n) => ok(worker(n)),
            _ => not_found("Worker not found"),
        },
        ("PUT", ["workers", id]) => ok(merge(worker(id.parse().unwrap_or(1)), &body)),
        ("DELETE", ["workers", _]) => ok(json!({ "message": "Worker deactivated successfully" })),
        ("GET", ["workers", id, "stats"]) => ok(json!({
            "worker_id": id.parse::<i64>().unwrap_or(0),
            "worker_name": "Alice Smith",
            "total_hours_week": 32.5,
            "total_hours_month": 120.0,
            "overtime_hours_week": 1.5,
            "overtime_hours_month": 4.0,
            "shifts_completed_week": 4,
            "shifts_completed_month": 15
        })),

        ("GET", ["shifts"]) => {
            let from = param("date_from");
            let to = param("date_to");
            let mut all = vec![
                shift(1, 1, "2024-06-03", "09:00", "17:00"),
                shift(2, 2, "2024-06-03", "13:00", "21:00"),
                shift(3, 1, "2024-05-27", "08:00", "12:00"),
            ];
            all.extend(state.created_shifts.lock().unwrap().iter().cloned());
            let listed: Vec<Value> = all
                .into_iter()
                .filter(|s| {
                    let day: String = s["date"].as_str().unwrap_or("").chars().take(10).collect();
                    from.as_deref().is_none_or(|f| day.as_str() >= f)
                        && to.as_deref().is_none_or(|t| day.as_str() <= t)
                })
                .collect();
            ok(json!(listed))
        }
        ("GET", ["shifts", "today"]) => ok(json!([shift(1, 1, "2024-06-03", "09:00", "17:00")])),
        ("GET", ["shifts", "worker", w, "upcoming"]) => ok(json!([shift(
            5,
            w.parse().unwrap_or(1),
            "2024-06-10",
            "09:00",
            "17:00"
        )])),
        ("POST", ["shifts"]) => {
            let saved = merge(json!({ "id": 99 }), &body);
            state.created_shifts.lock().unwrap().push(saved.clone());
            ok(saved)
        }
        ("GET", ["shifts", id]) => match id.parse::<i64>() {
            Ok(1) => ok(shift(1, 1, "2024-06-03", "09:00", "17:00")),
            _ => not_found("Shift not found"),
        },
        ("PUT", ["shifts", id]) => ok(merge(
            shift(id.parse().unwrap_or(1), 1, "2024-06-03", "09:00", "17:00"),
            &body,
        )),
        ("DELETE", ["shifts", _]) => ok(json!({ "message": "Shift deleted successfully" })),

        ("POST", ["tracking", "clock-in"]) => {
            let w = body.get("worker_id").and_then(Value::as_i64).unwrap_or(0);
            ok(record(11, w, "2024-06-03T09:00:00", None))
        }
        ("PUT", ["tracking", "clock-out", id]) => ok(record(
            id.parse().unwrap_or(10),
            1,
            "2024-06-03T08:00:00",
            Some("2024-06-03T16:30:00"),
        )),
        ("PUT", ["tracking", "break-start", id]) => {
            let mut r = record(id.parse().unwrap_or(10), 1, "2024-06-03T08:00:00", None);
            r["break_start"] = json!("2024-06-03T12:00:00");
            ok(r)
        }
        ("PUT", ["tracking", "break-end", id]) => {
            let mut r = record(id.parse().unwrap_or(12), 2, "2024-06-03T07:00:00", None);
            r["break_start"] = json!("2024-06-03T11:00:00");
            r["break_end"] = json!("2024-06-03T11:30:00");
            ok(r)
        }
        ("GET", ["tracking", "active"]) => ok(json!(active_records())),
        ("GET", ["tracking", "worker", id, "active"]) => match id.parse::<i64>() {
            Ok(1) => ok(record(10, 1, "2024-06-03T08:00:00", None)),
            _ => not_found("No active time record found"),
        },
        ("GET", ["tracking", "records"]) => ok(json!([
            record(7, 1, "2024-05-30T09:00:00", Some("2024-05-30T17:00:00")),
            record(8, 2, "2024-06-01T09:00:00", Some("2024-06-01T18:30:00")),
            record(9, 1, "2024-06-02T10:00:00", Some("2024-06-02T14:00:00")),
        ])),
        ("GET", ["tracking", "dashboard"]) => ok(json!({
            "total_workers": 3,
            "active_workers": 2,
            "total_shifts_today": 4,
            "workers_clocked_in": 2,
            "total_hours_today": 12.25,
            "overtime_hours_today": 0.5
        })),

        ("POST", ["google-sheets", "export"]) => ok(json!({
            "message": "Data exported successfully",
            "spreadsheet_id": "sheet-abc",
            "sheet_url": "https://docs.google.com/spreadsheets/d/sheet-abc",
            "records_exported": 3
        })),
        ("POST", ["google-sheets", "import"]) => ok(json!({
            "message": "Import completed",
            "imported_count": 2,
            "errors": []
        })),
        ("GET", ["google-sheets", "export-csv"]) => ok(json!({
            "csv_data": "id,worker,clock_in\n7,Alice Smith,2024-05-30T09:00:00\n",
            "filename": "time_records_20240603.csv"
        })),
        ("POST", ["google-sheets", "upload-csv"]) => ok(json!({
            "message": "CSV processed",
            "imported_count": 1,
            "errors": ["row 3: unknown worker"]
        })),

        _ => not_found("Not Found"),
    }
}

fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

fn ok(v: Value) -> Response {
    (StatusCode::OK, Json(v)).into_response()
}

fn not_found(detail: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
}

fn merge(mut base: Value, overlay: &Value) -> Value {
    if let (Some(b), Some(o)) = (base.as_object_mut(), overlay.as_object()) {
        for (k, v) in o {
            b.insert(k.clone(), v.clone());
        }
    }
    base
}

pub fn worker(id: i64) -> Value {
    let (name, position, active) = match id {
        1 => ("Alice Smith".to_string(), "Cashier", true),
        2 => ("Bob Jones".to_string(), "Cook", true),
        3 => ("Carol White".to_string(), "Manager", false),
        n => (format!("Clerk{n} Doe"), "Clerk", true),
    };
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.split(' ').next().unwrap_or("x").to_lowercase()),
        "phone": null,
        "position": position,
        "hourly_rate": 15.5,
        "is_active": active,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": null
    })
}

pub fn shift(id: i64, worker_id: i64, date: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "worker_id": worker_id,
        "date": format!("{date}T00:00:00"),
        "start_time": format!("{date}T{start}:00"),
        "end_time": format!("{date}T{end}:00"),
        "is_recurring": false,
        "recurrence_pattern": null,
        "status": "scheduled",
        "notes": null,
        "worker": worker(worker_id)
    })
}

pub fn record(id: i64, worker_id: i64, clock_in: &str, clock_out: Option<&str>) -> Value {
    json!({
        "id": id,
        "worker_id": worker_id,
        "shift_id": null,
        "clock_in": clock_in,
        "clock_out": clock_out,
        "break_start": null,
        "break_end": null,
        "total_hours": if clock_out.is_some() { 8.0 } else { 0.0 },
        "overtime_hours": 0.0,
        "status": if clock_out.is_some() { "completed" } else { "active" },
        "notes": null,
        "worker": worker(worker_id)
    })
}

/// Worker 1 is working; worker 2 is on a break.
pub fn active_records() -> Vec<Value> {
    let mut on_break = record(12, 2, "2024-06-03T07:00:00", None);
    on_break["break_start"] = json!("2024-06-03T11:00:00");
    vec![record(10, 1, "2024-06-03T08:00:00", None), on_break]
}
