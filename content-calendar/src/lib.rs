//! Calendar grids for a content schedule.
//!
//! Builds the day cells of a month or week view and buckets scheduled posts
//! onto them. Everything here is pure; the only clock reads are
//! [`is_today`] and [`is_today_in`].
//!
//! ```
//! use chrono::{NaiveDate, Weekday, Datelike};
//! use content_calendar::{build_month_grid, build_week_range};
//!
//! let grid = build_month_grid(2024, 2).unwrap();
//! assert_eq!(grid.len(), 35);
//! assert_eq!(grid.current_month_days().count(), 29);
//!
//! let week = build_week_range(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()).unwrap();
//! assert_eq!(week[0].weekday(), Weekday::Sun);
//! ```

mod bucket;
mod config;
mod error;
mod grid;
mod reschedule;
mod structs;
mod view;

#[cfg(feature = "serde")]
mod feed;

#[cfg(feature = "ics")]
mod ics;

pub use bucket::{assign_posts_to_day, assign_posts_to_day_in, bucket_posts, local_day};
pub use config::CalendarConfig;
pub use error::{CalendarError, Result};
pub use grid::{
    build_month_grid, build_month_grid_with, build_week_range, build_week_range_with,
    days_in_month, is_today, is_today_in, is_weekend, MonthGrid, DAYS_PER_WEEK,
};
pub use reschedule::{move_post, rescheduled_at};
pub use structs::{CalendarCell, DayBucket, PostStatus, ScheduledPost, ViewMode};
pub use view::CalendarView;

#[cfg(feature = "serde")]
pub use feed::parse_posts;

#[cfg(feature = "ics")]
pub use crate::ics::to_ics;
