//! Error types for the content-calendar crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the content-calendar crate.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    /// Returned when a computed date falls outside the range chrono can represent.
    #[error("date out of range around {year:04}-{month:02}")]
    OutOfRange { year: i32, month: u32 },

    /// Returned when a rescheduled local time does not exist in the target zone.
    #[error("local time {0} does not exist in the target time zone")]
    NonexistentLocalTime(NaiveDateTime),

    /// Returned when a post feed or config is not valid JSON.
    #[cfg(feature = "serde")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
