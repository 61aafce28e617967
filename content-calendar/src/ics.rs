use ics::properties::{Categories, Contact, DtStart, Status, Summary};
use log::debug;

use crate::{PostStatus, ScheduledPost};

const ICS_TIMESTAMP: &str = "%Y%m%dT%H%M%SZ";

/// Publishing schedule as an iCalendar feed. Drafts are left out.
#[must_use]
pub fn to_ics<'a>(name: &'a str, posts: &'a [ScheduledPost]) -> ics::ICalendar<'a> {
    let mut icalendar = ics::ICalendar::new("2.0", name);

    for post in posts {
        if let Some(event) = post.to_ics() {
            icalendar.add_event(event);
        }
    }

    debug!("exported {} posts to calendar {name}", posts.len());

    icalendar
}

impl PostStatus {
    fn ics_status(self) -> Option<&'static str> {
        match self {
            PostStatus::Published => Some("CONFIRMED"),
            PostStatus::Scheduled => Some("TENTATIVE"),
            PostStatus::Archived => Some("CANCELLED"),
            PostStatus::Draft => None,
        }
    }
}

impl ScheduledPost {
    #[must_use]
    pub fn to_ics(&self) -> Option<ics::Event<'_>> {
        let status = self.status.ics_status()?;
        let start = self.scheduled_at.format(ICS_TIMESTAMP).to_string();

        let mut ics_event = ics::Event::new(self.id.as_str(), start.clone());

        ics_event.push(DtStart::new(start));
        ics_event.push(Summary::new(self.title.as_str()));
        ics_event.push(Status::new(status));

        if !self.category.is_empty() {
            ics_event.push(Categories::new(self.category.as_str()));
        }

        if !self.author.is_empty() {
            ics_event.push(Contact::new(self.author.as_str()));
        }

        Some(ics_event)
    }
}
