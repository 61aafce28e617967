use chrono::{DateTime, NaiveDate, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One day slot of a rendered calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PostStatus {
    Published,
    Scheduled,
    Draft,
    Archived,
}

/// A post as delivered by the content backend. Only `scheduled_at` drives
/// bucketing, the remaining fields are carried for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduledPost {
    pub id: String,
    pub title: String,
    pub status: PostStatus,
    pub scheduled_at: DateTime<Utc>,
    pub category: String,
    pub author: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

/// The posts falling on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub posts: Vec<&'a ScheduledPost>,
}

impl DayBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
