use chrono::{Datelike, Days, Months, NaiveDate, TimeZone, Weekday};

use crate::bucket::bucket_posts;
use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};
use crate::grid::{build_month_grid_with, build_week_range_with, MonthGrid};
use crate::{DayBucket, ScheduledPost, ViewMode};

/// What the calendar currently shows: a mode and the date it is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub mode: ViewMode,
    pub reference: NaiveDate,
    pub week_start: Weekday,
}

impl CalendarView {
    pub fn new(mode: ViewMode, reference: NaiveDate) -> Self {
        Self {
            mode,
            reference,
            week_start: Weekday::Sun,
        }
    }

    pub fn from_config(config: &CalendarConfig, reference: NaiveDate) -> Self {
        Self {
            mode: config.default_view,
            reference,
            week_start: config.week_start,
        }
    }

    #[must_use]
    pub fn with_mode(self, mode: ViewMode) -> Self {
        Self { mode, ..self }
    }

    fn out_of_range(&self) -> CalendarError {
        CalendarError::OutOfRange {
            year: self.reference.year(),
            month: self.reference.month(),
        }
    }

    pub fn month_grid(&self) -> Result<MonthGrid> {
        build_month_grid_with(
            self.reference.year(),
            self.reference.month(),
            self.week_start,
        )
    }

    pub fn visible_days(&self) -> Result<Vec<NaiveDate>> {
        match self.mode {
            ViewMode::Month => Ok(self.month_grid()?.dates().collect()),
            ViewMode::Week => Ok(build_week_range_with(self.reference, self.week_start)?.to_vec()),
        }
    }

    pub fn buckets<'a, Tz: TimeZone>(
        &self,
        posts: &'a [ScheduledPost],
        tz: &Tz,
    ) -> Result<Vec<DayBucket<'a>>> {
        Ok(bucket_posts(self.visible_days()?, posts, tz))
    }

    /// One month or one week later. Month steps clamp the day, so Jan 31
    /// moves to the last day of February.
    pub fn next_period(&self) -> Result<Self> {
        let reference = match self.mode {
            ViewMode::Month => self.reference.checked_add_months(Months::new(1)),
            ViewMode::Week => self.reference.checked_add_days(Days::new(7)),
        }
        .ok_or_else(|| self.out_of_range())?;

        Ok(Self { reference, ..*self })
    }

    pub fn previous_period(&self) -> Result<Self> {
        let reference = match self.mode {
            ViewMode::Month => self.reference.checked_sub_months(Months::new(1)),
            ViewMode::Week => self.reference.checked_sub_days(Days::new(7)),
        }
        .ok_or_else(|| self.out_of_range())?;

        Ok(Self { reference, ..*self })
    }

    /// Header label, e.g. `February 2024` or `Jan 14 - Jan 20, 2024`.
    pub fn title(&self) -> Result<String> {
        match self.mode {
            ViewMode::Month => Ok(self.reference.format("%B %Y").to_string()),
            ViewMode::Week => {
                let week = build_week_range_with(self.reference, self.week_start)?;
                let (first, last) = (week[0], week[6]);

                if first.year() == last.year() {
                    Ok(format!(
                        "{} - {}",
                        first.format("%b %-d"),
                        last.format("%b %-d, %Y")
                    ))
                } else {
                    Ok(format!(
                        "{} - {}",
                        first.format("%b %-d, %Y"),
                        last.format("%b %-d, %Y")
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_title() {
        let view = CalendarView::new(ViewMode::Month, ymd(2024, 2, 10));
        assert_eq!(view.title().unwrap(), "February 2024");
    }

    #[test]
    fn week_title() {
        let view = CalendarView::new(ViewMode::Week, ymd(2024, 1, 17));
        assert_eq!(view.title().unwrap(), "Jan 14 - Jan 20, 2024");
    }

    #[test]
    fn week_title_across_years() {
        let view = CalendarView::new(ViewMode::Week, ymd(2025, 1, 1));
        assert_eq!(view.title().unwrap(), "Dec 29, 2024 - Jan 4, 2025");
    }

    #[test]
    fn month_navigation_clamps_day() {
        let view = CalendarView::new(ViewMode::Month, ymd(2024, 1, 31));
        assert_eq!(view.next_period().unwrap().reference, ymd(2024, 2, 29));
        assert_eq!(view.previous_period().unwrap().reference, ymd(2023, 12, 31));
    }

    #[test]
    fn week_navigation() {
        let view = CalendarView::new(ViewMode::Week, ymd(2024, 12, 30));
        assert_eq!(view.next_period().unwrap().reference, ymd(2025, 1, 6));
        assert_eq!(view.previous_period().unwrap().reference, ymd(2024, 12, 23));
    }

    #[test]
    fn navigation_past_max_fails() {
        let view = CalendarView::new(ViewMode::Week, NaiveDate::MAX);
        assert!(matches!(
            view.next_period(),
            Err(CalendarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn config_drives_week_start() {
        let config = CalendarConfig {
            week_start: Weekday::Mon,
            default_view: ViewMode::Week,
        };
        let view = CalendarView::from_config(&config, ymd(2024, 1, 17));

        let days = view.visible_days().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], ymd(2024, 1, 15));
        assert_eq!(view.title().unwrap(), "Jan 15 - Jan 21, 2024");
    }
}
