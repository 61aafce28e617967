use chrono::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ViewMode;

/// Display preferences for a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CalendarConfig {
    pub week_start: Weekday,
    pub default_view: ViewMode,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            default_view: ViewMode::Month,
        }
    }
}

#[cfg(feature = "serde")]
impl CalendarConfig {
    pub fn from_json<S: AsRef<str>>(s: S) -> crate::Result<Self> {
        Ok(serde_json::from_str(s.as_ref())?)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::CalendarError;

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(CalendarConfig::from_json("{}").unwrap(), CalendarConfig::default());
    }

    #[test]
    fn reads_week_start_and_view() {
        let config =
            CalendarConfig::from_json(r#"{ "weekStart": "Mon", "defaultView": "week" }"#).unwrap();

        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.default_view, ViewMode::Week);
    }

    #[test]
    fn rejects_unknown_view() {
        assert!(matches!(
            CalendarConfig::from_json(r#"{ "defaultView": "year" }"#),
            Err(CalendarError::Json(_))
        ));
    }
}
