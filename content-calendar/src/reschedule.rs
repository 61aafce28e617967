use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;

use crate::error::{CalendarError, Result};
use crate::ScheduledPost;

/// Handles a post being dropped onto another day by handing it to
/// `on_post_moved`. Persisting the move is up to the callback.
pub fn move_post<F>(post: &ScheduledPost, new_date: NaiveDate, mut on_post_moved: F)
where
    F: FnMut(&ScheduledPost, NaiveDate),
{
    debug!("post {} dropped on {new_date}", post.id);
    on_post_moved(post, new_date);
}

/// The instant `post` would have if moved to `new_date`, keeping its time of
/// day in `tz`. Ambiguous local times resolve to the earlier instant.
pub fn rescheduled_at<Tz: TimeZone>(
    post: &ScheduledPost,
    new_date: NaiveDate,
    tz: &Tz,
) -> Result<DateTime<Utc>> {
    let time_of_day = post.scheduled_at.with_timezone(tz).time();
    let local = new_date.and_time(time_of_day);

    tz.from_local_datetime(&local)
        .earliest()
        .map(|moved| moved.with_timezone(&Utc))
        .ok_or(CalendarError::NonexistentLocalTime(local))
}
