use std::slice::Chunks;

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone, Utc, Weekday};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{CalendarError, Result};
use crate::CalendarCell;

pub const DAYS_PER_WEEK: usize = 7;

/// The cells of a month view: the whole month padded with days of the
/// neighbouring months to complete weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of exactly seven cells.
    pub fn weeks(&self) -> Chunks<'_, CalendarCell> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().map(|cell| cell.date)
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_current_month)
            .map(|cell| cell.date)
    }

    pub fn into_cells(self) -> Vec<CalendarCell> {
        self.cells
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }

    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::OutOfRange { year, month })
}

/// Position of `day` in a week beginning on `week_start`, 0..=6.
fn days_from(day: Weekday, week_start: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

/// Number of days in `month`, which is 1-based (1 = January).
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    first_of_month(year, month)?;

    let days = match month {
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };

    Ok(days)
}

/// Builds the month grid for `month` (1-based, 1 = January) with weeks
/// starting on Sunday.
pub fn build_month_grid(year: i32, month: u32) -> Result<MonthGrid> {
    build_month_grid_with(year, month, Weekday::Sun)
}

/// Builds the month grid for `month` with weeks starting on `week_start`.
///
/// `month` is 1-based like chrono's, so `build_month_grid_with(2024, 2, ..)`
/// is February 2024. Anything outside 1..=12 is `InvalidMonth`.
pub fn build_month_grid_with(year: i32, month: u32, week_start: Weekday) -> Result<MonthGrid> {
    let first = first_of_month(year, month)?;
    let out_of_range = || CalendarError::OutOfRange { year, month };

    let leading = days_from(first.weekday(), week_start) as usize;
    let in_month = days_in_month(year, month)? as usize;
    let trailing = match (leading + in_month) % DAYS_PER_WEEK {
        0 => 0,
        remainder => DAYS_PER_WEEK - remainder,
    };
    let total = leading + in_month + trailing;

    let start = first
        .checked_sub_days(Days::new(leading as u64))
        .ok_or_else(out_of_range)?;

    let cells = (0..total as u64)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .ok_or_else(out_of_range)?;

            Ok(CalendarCell {
                date,
                is_current_month: date.year() == year && date.month() == month,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MonthGrid { year, month, cells })
}

/// The seven days of the Sunday-based week containing `reference`.
pub fn build_week_range(reference: NaiveDate) -> Result<[NaiveDate; DAYS_PER_WEEK]> {
    build_week_range_with(reference, Weekday::Sun)
}

pub fn build_week_range_with(
    reference: NaiveDate,
    week_start: Weekday,
) -> Result<[NaiveDate; DAYS_PER_WEEK]> {
    let out_of_range = || CalendarError::OutOfRange {
        year: reference.year(),
        month: reference.month(),
    };

    let offset = days_from(reference.weekday(), week_start);
    let start = reference
        .checked_sub_days(Days::new(offset.into()))
        .ok_or_else(out_of_range)?;

    let mut days = [start; DAYS_PER_WEEK];
    let mut current = start;
    for slot in days.iter_mut().skip(1) {
        current = current.succ_opt().ok_or_else(out_of_range)?;
        *slot = current;
    }

    Ok(days)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `date` is the current day in the host's local time zone.
pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

pub fn is_today_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> bool {
    date == Utc::now().with_timezone(tz).date_naive()
}
