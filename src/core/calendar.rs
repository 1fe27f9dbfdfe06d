//! Month-grid projection for the shift calendar.
//!
//! The grid covers the reference month padded to whole Sunday-first weeks.
//! Shifts are matched to cells by calendar-date string equality.

use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::utils::date::{date_key, last_day_of_month, month_name, today};
use chrono::{Datelike, Days, NaiveDate};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;
        let year = y
            .parse::<i32>()
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month = m
            .parse::<u32>()
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::new(year, month)
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        last_day_of_month(self.year, self.month).unwrap_or(NaiveDate::MAX)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGrid {
    month: MonthRef,
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarGrid {
    pub fn for_month(month: MonthRef) -> Self {
        let first = month.first_day();
        let last = month.last_day();

        let lead = first.weekday().num_days_from_sunday() as u64;
        let trail = 6 - last.weekday().num_days_from_sunday() as u64;

        let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
        let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

        Self { month, start, end }
    }

    pub fn month(&self) -> MonthRef {
        self.month
    }

    /// First cell: the Sunday on or before the first of the month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last cell: the Saturday on or after the last of the month.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn weeks(&self) -> usize {
        self.len() / 7
    }

    /// A fresh iterator over every cell date; call again to restart.
    pub fn days(&self) -> GridDays {
        GridDays {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Cells with their matching shifts, in grid order.
    pub fn cells<'a>(&self, shifts: &'a [Shift]) -> impl Iterator<Item = CalendarCell<'a>> + 'a {
        let month = self.month;
        self.days().map(move |date| CalendarCell {
            date,
            in_month: month.contains(date),
            shifts: shifts_on(shifts, date),
        })
    }
}

impl IntoIterator for &CalendarGrid {
    type Item = NaiveDate;
    type IntoIter = GridDays;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

#[derive(Debug, Clone)]
pub struct GridDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for GridDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(d) => (self.end - d).num_days() as usize + 1,
            None => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridDays {}
impl FusedIterator for GridDays {}

#[derive(Debug, Clone)]
pub struct CalendarCell<'a> {
    pub date: NaiveDate,
    /// False for padding days from the adjacent months.
    pub in_month: bool,
    pub shifts: Vec<&'a Shift>,
}

/// Shifts whose date component equals `date`.
pub fn shifts_on(shifts: &[Shift], date: NaiveDate) -> Vec<&Shift> {
    let key = date_key(&date);
    shifts.iter().filter(|s| s.date_key() == key).collect()
}
