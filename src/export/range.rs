// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::last_day_of_month;
use chrono::{Datelike, NaiveDate};

fn bad(msg: &str) -> AppError {
    AppError::Export(msg.to_string())
}

/// First and last day covered by one period token.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad("invalid month"))?;
            let last = last_day_of_month(first.year(), first.month())
                .ok_or_else(|| bad("invalid month"))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported --range format")),
    }
}

/// Parse --range (year / month / day / span).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return period_bounds(r.trim());
    };

    let (start, end) = (start_raw.trim(), end_raw.trim());
    if start.len() != end.len() {
        return Err(bad("start and end must have same format"));
    }

    let (from, _) = period_bounds(start)?;
    let (_, to) = period_bounds(end)?;
    if from > to {
        return Err(bad("range start is after its end"));
    }
    Ok((from, to))
}
