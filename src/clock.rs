//! Calendar date source.
//!
//! Every tracker operation that takes an optional date falls back to
//! "today" as reported by a [`Clock`]. Production code uses the local
//! wall clock; tests pin a date with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Date-key format shared by every clock: `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Render `date` as a date-key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Pin the clock to `year-month-day`. Returns `None` for an invalid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
