use crate::Context;
use crate::cli::parser::ShiftCmd;
use crate::core::calendar::{CalendarGrid, MonthRef};
use crate::core::refetch::{Mutation, View};
use crate::core::shift_form::{ShiftFields, ShiftForm};
use crate::errors::AppResult;
use crate::models::shift::{RecurrencePattern, ShiftFilter};
use crate::ui::messages::{confirm, fail, header, info, success};
use crate::ui::render;
use tracing::debug;

use super::{parse_opt_day, parse_status, refetch};

pub async fn handle(cmd: &ShiftCmd, ctx: &Context) -> AppResult<()> {
    let api = ctx.api.shifts();

    match cmd {
        ShiftCmd::List {
            worker,
            status,
            from,
            to,
        } => {
            let filter = ShiftFilter {
                worker_id: *worker,
                status: parse_status(status)?,
                date_from: parse_opt_day(from)?,
                date_to: parse_opt_day(to)?,
                ..ShiftFilter::default()
            };
            show_list(ctx, &filter, "Shifts").await
        }

        ShiftCmd::Show { id } => {
            let shift = api
                .get(*id)
                .await
                .map_err(|e| fail("Loading shift failed", e))?;
            print!("{}", render::shift_detail(&shift));
            Ok(())
        }

        ShiftCmd::Today => show_today(ctx).await,

        ShiftCmd::Upcoming { worker, limit } => {
            let limit = limit.unwrap_or(ctx.cfg.upcoming_limit);
            let shifts = api
                .upcoming(*worker, limit)
                .await
                .map_err(|e| fail("Loading upcoming shifts failed", e))?;
            header(format!("Upcoming shifts for worker {worker}"));
            print!("{}", render::shifts(&shifts));
            Ok(())
        }

        ShiftCmd::Calendar {
            month,
            worker,
            status,
        } => {
            let month = match month {
                Some(m) => MonthRef::parse(m)?,
                None => MonthRef::current(),
            };
            let grid = CalendarGrid::for_month(month);
            let filter = ShiftFilter {
                worker_id: *worker,
                status: parse_status(status)?,
                date_from: Some(grid.start()),
                date_to: Some(grid.end()),
                ..ShiftFilter::default()
            };
            let shifts = api
                .list(&filter)
                .await
                .map_err(|e| fail("Loading shifts failed", e))?;
            print!("{}", render::calendar(&grid, &shifts, ctx.cfg.show_weekday));
            Ok(())
        }

        ShiftCmd::Add {
            worker,
            date,
            start,
            end,
            status,
            notes,
            recurring,
            confirm: ask,
        } => {
            let mut form = ShiftForm::new();
            form.open_create()?;
            if let Some(fields) = form.fields_mut() {
                fields.worker_id = Some(*worker);
                fields.date = date.clone();
                fields.start = start.clone();
                fields.end = end.clone();
                fields.notes = notes.clone().unwrap_or_default();
                if let Some(s) = parse_status(status)? {
                    fields.status = s;
                }
                fields.recurrence = parse_recurrence(recurring)?;
            }
            submit_form(ctx, &mut form, *ask).await
        }

        ShiftCmd::Edit {
            id,
            worker,
            date,
            start,
            end,
            status,
            notes,
            recurring,
            no_recurring,
            confirm: ask,
        } => {
            let shift = api
                .get(*id)
                .await
                .map_err(|e| fail("Loading shift failed", e))?;

            let mut form = ShiftForm::new();
            form.open_edit(&shift)?;
            if let Some(fields) = form.fields_mut() {
                apply_edits(fields, *worker, date, start, end, notes);
                if let Some(s) = parse_status(status)? {
                    fields.status = s;
                }
                if *no_recurring {
                    fields.recurrence = None;
                } else if recurring.is_some() {
                    fields.recurrence = parse_recurrence(recurring)?;
                }
            }
            submit_form(ctx, &mut form, *ask).await
        }

        ShiftCmd::Del { id } => {
            api.delete(*id)
                .await
                .map_err(|e| fail("Deleting shift failed", e))?;
            success(format!("Shift {id} deleted"));
            refetch(ctx, Mutation::DeleteShift, View::Shifts).await
        }
    }
}

fn apply_edits(
    fields: &mut ShiftFields,
    worker: Option<i64>,
    date: &Option<String>,
    start: &Option<String>,
    end: &Option<String>,
    notes: &Option<String>,
) {
    if worker.is_some() {
        fields.worker_id = worker;
    }
    if let Some(d) = date {
        fields.date = d.clone();
    }
    if let Some(s) = start {
        fields.start = s.clone();
    }
    if let Some(e) = end {
        fields.end = e.clone();
    }
    if let Some(n) = notes {
        fields.notes = n.clone();
    }
}

fn parse_recurrence(s: &Option<String>) -> AppResult<Option<RecurrencePattern>> {
    s.as_deref().map(str::parse).transpose()
}

async fn submit_form(ctx: &Context, form: &mut ShiftForm, ask: bool) -> AppResult<()> {
    if ask {
        if let Some(f) = form.fields() {
            info(format!(
                "Worker {} on {} from {} to {} ({})",
                f.worker_id.unwrap_or_default(),
                f.date,
                f.start,
                f.end,
                f.status
            ));
        }
        if !confirm("Submit this shift?")? {
            form.cancel()?;
            info("Cancelled, nothing was sent.");
            return Ok(());
        }
    }

    let shift = form
        .submit(&ctx.api.shifts())
        .await
        .map_err(|e| fail("Saving shift failed", e))?;

    success(format!(
        "Shift {} saved: {} {} {}",
        shift.id,
        shift.worker_name(),
        shift.date_key(),
        shift.time_range()
    ));
    if !Mutation::SaveShift.refreshes(View::Shifts) {
        return Ok(());
    }
    debug!(shift = shift.id, "refetching shifts of the saved day");
    let day = shift.date.date();
    let filter = ShiftFilter {
        date_from: Some(day),
        date_to: Some(day),
        ..ShiftFilter::default()
    };
    show_list(ctx, &filter, &format!("Shifts on {}", shift.date_key())).await
}

pub(crate) async fn show_list(ctx: &Context, filter: &ShiftFilter, title: &str) -> AppResult<()> {
    let shifts = ctx
        .api
        .shifts()
        .list(filter)
        .await
        .map_err(|e| fail("Loading shifts failed", e))?;
    header(title);
    print!("{}", render::shifts(&shifts));
    Ok(())
}

async fn show_today(ctx: &Context) -> AppResult<()> {
    let shifts = ctx
        .api
        .shifts()
        .today()
        .await
        .map_err(|e| fail("Loading today's shifts failed", e))?;
    header("Today's shifts");
    print!("{}", render::shifts(&shifts));
    Ok(())
}
