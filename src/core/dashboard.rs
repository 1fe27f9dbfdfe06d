use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::dashboard::DashboardStats;
use crate::models::time_record::TimeRecord;
use tracing::error;

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub active: Vec<TimeRecord>,
}

impl Dashboard {
    /// Fetch summary and active records concurrently.
    ///
    /// No partial rendering: if either request fails the whole view fails.
    pub async fn load(api: &ApiClient) -> AppResult<Self> {
        let tracking = api.tracking();
        let (stats, active) = tokio::join!(tracking.dashboard(), tracking.active());

        match (stats, active) {
            (Ok(stats), Ok(active)) => Ok(Self { stats, active }),
            (Err(e), other) => {
                if let Err(second) = other {
                    error!(error = %second, "active records fetch failed");
                }
                Err(e)
            }
            (Ok(_), Err(e)) => Err(e),
        }
    }

    /// The four stat cards, in display order.
    pub fn cards(&self) -> [(&'static str, u64); 4] {
        [
            ("Total Workers", self.stats.total_workers),
            ("Active Workers", self.stats.active_workers),
            ("Today's Shifts", self.stats.total_shifts_today),
            ("Currently Clocked In", self.stats.workers_clocked_in),
        ]
    }
}
