use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::{PostStatus, ScheduledPost};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    id: String,
    title: String,
    status: PostStatus,
    scheduled_at: Option<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    author: String,
}

/// Reads the content backend's JSON array of posts.
///
/// Only a malformed document is an error. Entries that cannot be placed on
/// the calendar, because their `scheduledAt` is missing or not RFC 3339, or
/// because the entry itself is malformed, are logged and skipped.
pub fn parse_posts<S: AsRef<str>>(json: S) -> Result<Vec<ScheduledPost>> {
    let entries: Vec<Value> = serde_json::from_str(json.as_ref())?;
    let mut posts = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.into_iter().enumerate() {
        let raw: RawPost = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("skipping post at index {idx}: {err}");
                continue;
            }
        };

        let Some(scheduled_at) = raw.scheduled_at.as_deref() else {
            if raw.status == PostStatus::Draft {
                debug!("skipping unscheduled draft {}", raw.id);
            } else {
                warn!("skipping post {}: missing scheduledAt", raw.id);
            }
            continue;
        };

        let scheduled_at = match DateTime::parse_from_rfc3339(scheduled_at) {
            Ok(scheduled_at) => scheduled_at.with_timezone(&Utc),
            Err(err) => {
                warn!(
                    "skipping post {}: invalid scheduledAt {scheduled_at:?}: {err}",
                    raw.id
                );
                continue;
            }
        };

        posts.push(ScheduledPost {
            id: raw.id,
            title: raw.title,
            status: raw.status,
            scheduled_at,
            category: raw.category,
            author: raw.author,
        });
    }

    Ok(posts)
}
