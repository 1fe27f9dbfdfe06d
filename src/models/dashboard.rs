use serde::{Deserialize, Serialize};

/// Aggregate counts returned by `GET /tracking/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_workers: u64,
    pub active_workers: u64,
    pub total_shifts_today: u64,
    pub workers_clocked_in: u64,
    pub total_hours_today: f64,
    pub overtime_hours_today: f64,
}
