pub mod auth;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod reports;
pub mod shifts;
pub mod track;
pub mod workers;

use crate::Context;
use crate::core::refetch::{Mutation, View};
use crate::errors::{AppError, AppResult};
use crate::models::shift::{ShiftFilter, ShiftStatus};
use crate::models::time_record::RecordQuery;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use tracing::debug;

pub(crate) fn parse_day(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn parse_opt_day(s: &Option<String>) -> AppResult<Option<NaiveDate>> {
    s.as_deref().map(parse_day).transpose()
}

pub(crate) fn parse_status(s: &Option<String>) -> AppResult<Option<ShiftStatus>> {
    s.as_deref().map(str::parse).transpose()
}

/// Re-fetch the view a command is showing when the mutation made it stale.
pub(crate) async fn refetch(ctx: &Context, mutation: Mutation, current: View) -> AppResult<()> {
    if !mutation.refreshes(current) {
        return Ok(());
    }
    debug!(?mutation, ?current, "refetching view");

    match current {
        View::Dashboard => dashboard::show(ctx).await,
        View::Workers => workers::show_list(ctx, false).await,
        View::ActiveRecords => track::show_status(ctx).await,
        View::Records => {
            let query = RecordQuery {
                limit: Some(ctx.cfg.records_limit),
                ..RecordQuery::default()
            };
            track::show_records(ctx, &query).await
        }
        View::Shifts => shifts::show_list(ctx, &ShiftFilter::default(), "Shifts").await,
    }
}
