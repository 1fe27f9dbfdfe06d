use crate::Context;
use crate::cli::parser::TrackCmd;
use crate::core::refetch::View;
use crate::core::tracking::{TrackingAction, TrackingPanel, check_clock_in};
use crate::errors::{AppError, AppResult};
use crate::models::time_record::RecordQuery;
use crate::ui::messages::{fail, header, info, success};
use crate::ui::render;
use chrono::Local;

use super::refetch;

pub async fn handle(cmd: &TrackCmd, ctx: &Context) -> AppResult<()> {
    let tracking = ctx.api.tracking();

    match cmd {
        TrackCmd::Status => show_status(ctx).await,

        TrackCmd::ClockIn { worker } => {
            let action = TrackingAction::ClockIn(*worker);
            check_clock_in(&ctx.api, *worker)
                .await
                .map_err(|e| fail(action.failure_label(), e))?;
            run_action(ctx, action).await
        }

        TrackCmd::ClockOut { record } => run_action(ctx, TrackingAction::ClockOut(*record)).await,

        TrackCmd::Break { record } => {
            let active = tracking
                .active()
                .await
                .map_err(|e| fail("Loading time tracking failed", e))?;
            let rec = active.iter().find(|r| r.id == *record).ok_or_else(|| {
                fail(
                    "Break update failed",
                    AppError::Validation(format!("record {record} is not active")),
                )
            })?;
            run_action(ctx, TrackingAction::break_toggle(rec)).await
        }

        TrackCmd::Records {
            worker,
            skip,
            limit,
        } => {
            let query = RecordQuery {
                worker_id: *worker,
                skip: *skip,
                limit: Some(limit.unwrap_or(ctx.cfg.records_limit)),
            };
            show_records(ctx, &query).await
        }

        TrackCmd::Worker { id } => {
            let open = tracking
                .worker_active(*id)
                .await
                .map_err(|e| fail("Loading active record failed", e))?;
            match open {
                Some(record) => print!(
                    "{}",
                    render::active_records(&[record], Local::now().naive_local())
                ),
                None => info(format!("Worker {id} has no open record")),
            }
            Ok(())
        }
    }
}

async fn run_action(ctx: &Context, action: TrackingAction) -> AppResult<()> {
    action
        .perform(&ctx.api.tracking())
        .await
        .map_err(|e| fail(action.failure_label(), e))?;
    success(action.success_label());
    refetch(ctx, action.mutation(), View::ActiveRecords).await
}

pub(crate) async fn show_status(ctx: &Context) -> AppResult<()> {
    let panel = TrackingPanel::load(&ctx.api)
        .await
        .map_err(|e| fail("Loading time tracking failed", e))?;

    header("Currently clocked in");
    print!(
        "{}",
        render::active_records(&panel.active, Local::now().naive_local())
    );

    let candidates: Vec<String> = panel
        .candidates()
        .iter()
        .map(|w| format!("{} ({})", w.label(), w.id))
        .collect();
    if candidates.is_empty() {
        info("No workers available to clock in");
    } else {
        info(format!("Available to clock in: {}", candidates.join(", ")));
    }
    Ok(())
}

pub(crate) async fn show_records(ctx: &Context, query: &RecordQuery) -> AppResult<()> {
    let records = ctx
        .api
        .tracking()
        .records(query)
        .await
        .map_err(|e| fail("Loading time records failed", e))?;
    header("Time records");
    print!("{}", render::records(&records));
    Ok(())
}
