//! Text rendering of the console views.
//!
//! Every function returns the rendered block; command handlers print it.

use crate::core::calendar::CalendarGrid;
use crate::core::dashboard::Dashboard;
use crate::core::elapsed::Elapsed;
use crate::models::shift::Shift;
use crate::models::time_record::TimeRecord;
use crate::models::worker::{Worker, WorkerStats};
use crate::utils::colors::{greyed, on_break, paint_status};
use crate::utils::date::{WEEK_HEADER, weekday_short};
use crate::utils::formatting::{bold, dim, hours1, or_dash, pad_left, pad_right, truncate};
use crate::utils::table::Table;
use chrono::NaiveDateTime;

const CELL_WIDTH: usize = 20;
const NOTES_WIDTH: usize = 60;

pub fn dashboard(view: &Dashboard, now: NaiveDateTime) -> String {
    let mut out = String::new();

    for (label, value) in view.cards() {
        out.push_str(&format!(
            "{} {}\n",
            pad_right(label, 22),
            bold(&pad_left(&value.to_string(), 6))
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Hours today: {}h   Overtime today: {}h\n\n",
        hours1(view.stats.total_hours_today),
        hours1(view.stats.overtime_hours_today)
    ));

    out.push_str(&bold("Currently clocked in"));
    out.push('\n');
    out.push_str(&active_records(&view.active, now));
    out
}

/// Open records with elapsed time since clock-in.
pub fn active_records(records: &[TimeRecord], now: NaiveDateTime) -> String {
    if records.is_empty() {
        return format!("{}\n", dim("No workers clocked in"));
    }

    let mut table = Table::with_headers(&["Record", "Worker", "Position", "Clock in", "Elapsed", "State"]);
    for r in records {
        let state = if r.on_break() {
            on_break("on break")
        } else {
            "working".to_string()
        };
        table.add_row(vec![
            r.id.to_string(),
            r.worker_name(),
            or_dash(Some(&r.worker_position())),
            r.clock_in.format("%H:%M").to_string(),
            Elapsed::between(r.clock_in, now).to_string(),
            state,
        ]);
    }
    table.render()
}

pub fn records(records: &[TimeRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", dim("No time records"));
    }

    let mut table = Table::with_headers(&[
        "ID", "Worker", "Clock in", "Clock out", "Break", "Hours", "Overtime", "Status",
    ]);
    for r in records {
        let brk = match (r.break_start, r.break_end) {
            (Some(s), Some(e)) => format!("{}-{}", s.format("%H:%M"), e.format("%H:%M")),
            (Some(s), None) => format!("{}-", s.format("%H:%M")),
            _ => "-".to_string(),
        };
        table.add_row(vec![
            r.id.to_string(),
            r.worker_name(),
            r.clock_in.format("%Y-%m-%d %H:%M").to_string(),
            r.clock_out
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            brk,
            format!("{:.2}", r.hours()),
            format!("{:.2}", r.overtime()),
            r.status.as_str().to_string(),
        ]);
    }
    table.render()
}

pub fn workers(workers: &[Worker]) -> String {
    if workers.is_empty() {
        return format!("{}\n", dim("No workers"));
    }

    let mut table = Table::with_headers(&["ID", "Name", "Email", "Position", "Rate", "Active"]);
    for w in workers {
        table.add_row(vec![
            w.id.to_string(),
            w.name.clone(),
            w.email.clone(),
            or_dash(w.position.as_deref()),
            w.hourly_rate
                .map(|r| format!("{r:.2}"))
                .unwrap_or_else(|| "-".to_string()),
            if w.is_active { "yes" } else { "no" }.to_string(),
        ]);
    }
    table.render()
}

pub fn worker_detail(w: &Worker) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  (#{})\n", bold(&w.name), w.id));
    out.push_str(&format!("  Email    : {}\n", w.email));
    out.push_str(&format!("  Phone    : {}\n", or_dash(w.phone.as_deref())));
    out.push_str(&format!("  Position : {}\n", or_dash(w.position.as_deref())));
    out.push_str(&format!(
        "  Rate     : {}\n",
        w.hourly_rate
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!(
        "  Active   : {}\n",
        if w.is_active { "yes" } else { "no" }
    ));
    out
}

pub fn worker_stats(s: &WorkerStats) -> String {
    let mut table = Table::with_headers(&["", "Week", "Month"]);
    table.add_row(vec![
        "Hours".into(),
        hours1(s.total_hours_week),
        hours1(s.total_hours_month),
    ]);
    table.add_row(vec![
        "Overtime".into(),
        hours1(s.overtime_hours_week),
        hours1(s.overtime_hours_month),
    ]);
    table.add_row(vec![
        "Shifts completed".into(),
        s.shifts_completed_week.to_string(),
        s.shifts_completed_month.to_string(),
    ]);
    format!("{} (#{})\n{}", bold(&s.worker_name), s.worker_id, table.render())
}

pub fn shifts(shifts: &[Shift]) -> String {
    if shifts.is_empty() {
        return format!("{}\n", dim("No shifts"));
    }

    let mut table = Table::with_headers(&["ID", "Date", "Time", "Worker", "Status", "Recurring", "Notes"]);
    for s in shifts {
        table.add_row(vec![
            s.id.to_string(),
            s.date_key(),
            s.time_range(),
            s.worker_name(),
            s.status.as_str().to_string(),
            recurrence_label(s),
            truncate(s.notes.as_deref().unwrap_or(""), 30),
        ]);
    }
    table.render()
}

pub fn shift_detail(s: &Shift) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  (#{})\n", bold(&s.worker_name()), s.id));
    out.push_str(&format!("  Date      : {}\n", s.date_key()));
    out.push_str(&format!("  Time      : {}\n", s.time_range()));
    out.push_str(&format!("  Status    : {}\n", paint_status(s.status)));
    out.push_str(&format!("  Recurring : {}\n", recurrence_label(s)));

    if let Some(notes) = s.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        out.push_str("  Notes     :\n");
        for line in textwrap::wrap(notes, NOTES_WIDTH) {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out
}

fn recurrence_label(s: &Shift) -> String {
    match (s.is_recurring, s.recurrence_pattern) {
        (true, Some(p)) => p.as_str().to_string(),
        (true, None) => "yes".to_string(),
        _ => "-".to_string(),
    }
}

/// Seven-column month grid; each day lists `#id worker hh:mm-hh:mm`.
pub fn calendar(grid: &CalendarGrid, shifts: &[Shift], show_weekday: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold(&grid.month().label()));
    out.push('\n');

    for name in WEEK_HEADER {
        out.push_str(&pad_right(name, CELL_WIDTH));
        out.push(' ');
    }
    out.push('\n');
    out.push_str(&"-".repeat((CELL_WIDTH + 1) * 7));
    out.push('\n');

    let cells: Vec<_> = grid.cells(shifts).collect();
    for week in cells.chunks(7) {
        let depth = week.iter().map(|c| c.shifts.len()).max().unwrap_or(0);

        for cell in week {
            let label = if show_weekday {
                format!("{} {}", weekday_short(&cell.date), cell.date.format("%d"))
            } else {
                cell.date.format("%d").to_string()
            };
            out.push_str(&paint_cell(&label, cell.in_month));
            out.push(' ');
        }
        out.push('\n');

        for line in 0..depth {
            for cell in week {
                let text = cell
                    .shifts
                    .get(line)
                    .map(|s| format!("#{} {} {}", s.id, first_name(s), s.time_range()))
                    .unwrap_or_default();
                out.push_str(&paint_cell(&text, cell.in_month));
                out.push(' ');
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn first_name(s: &Shift) -> String {
    s.worker_name()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Pad first, then colour, so escape codes never count towards the width.
fn paint_cell(text: &str, in_month: bool) -> String {
    let cell = pad_right(&truncate(text, CELL_WIDTH), CELL_WIDTH);
    if in_month { cell } else { greyed(&cell) }
}
