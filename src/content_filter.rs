use chrono::{DateTime, Duration, Utc};

use crate::config::Defaults;
use crate::content::Publishable;

/// Decides which entries are published. `now` is fixed when the filter is
/// built, so every entry of one pass is judged against the same instant.
#[derive(Debug, Clone, Copy)]
pub struct ContentFilter {
    now: DateTime<Utc>,
    margin: Duration,
    show_scheduled: bool,
}

impl ContentFilter {
    pub fn new(now: DateTime<Utc>, margin: Duration) -> Self {
        ContentFilter {
            now,
            margin,
            show_scheduled: false,
        }
    }

    pub fn from_config(defaults: &Defaults, now: DateTime<Utc>) -> Self {
        ContentFilter {
            now,
            margin: defaults.scheduled_post_margin(),
            show_scheduled: defaults.show_scheduled,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Entries dated after this instant are not published yet.
    /// Saturates at the latest representable instant.
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.now
            .checked_add_signed(self.margin)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_published<T: Publishable + ?Sized>(&self, entry: &T) -> bool {
        if entry.is_draft() {
            return false;
        }
        self.show_scheduled || entry.effective_date() <= self.cutoff()
    }
}
