//! Time source for "today" and "now"

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Supplies the current date and instant to the store and the presentation layer
pub trait Clock {
    /// Today's calendar date in the user's local time zone
    fn today(&self) -> NaiveDate;

    /// Current instant, used for `created_at`
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Pin the clock to midnight UTC of `today`
    pub fn on(today: NaiveDate) -> Self {
        Self {
            today,
            now: today.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
