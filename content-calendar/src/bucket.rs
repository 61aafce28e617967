use std::collections::HashMap;

use chrono::{Local, NaiveDate, TimeZone};

use crate::{DayBucket, ScheduledPost};

/// The calendar day a post is scheduled on, as seen from `tz`.
pub fn local_day<Tz: TimeZone>(post: &ScheduledPost, tz: &Tz) -> NaiveDate {
    post.scheduled_at.with_timezone(tz).date_naive()
}

/// Posts scheduled on `day` in the host's local time zone, in input order.
pub fn assign_posts_to_day(posts: &[ScheduledPost], day: NaiveDate) -> Vec<&ScheduledPost> {
    assign_posts_to_day_in(posts, day, &Local)
}

pub fn assign_posts_to_day_in<'a, Tz: TimeZone>(
    posts: &'a [ScheduledPost],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<&'a ScheduledPost> {
    posts
        .iter()
        .filter(|post| local_day(post, tz) == day)
        .collect()
}

/// Buckets posts onto every day in `days` with a single pass over `posts`.
/// Each bucket keeps the input order of its posts.
pub fn bucket_posts<'a, I, Tz>(days: I, posts: &'a [ScheduledPost], tz: &Tz) -> Vec<DayBucket<'a>>
where
    I: IntoIterator<Item = NaiveDate>,
    Tz: TimeZone,
{
    let mut by_day: HashMap<NaiveDate, Vec<&ScheduledPost>> = HashMap::new();
    for post in posts {
        by_day.entry(local_day(post, tz)).or_default().push(post);
    }

    days.into_iter()
        .map(|date| DayBucket {
            date,
            posts: by_day.get(&date).cloned().unwrap_or_default(),
        })
        .collect()
}
