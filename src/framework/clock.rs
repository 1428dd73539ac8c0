//! Calendar access for the date-driven rules (membership, maintenance, payment dates).

use chrono::{Local, Months, NaiveDate};

/// Source of "today" for every date-dependent operation.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Adds calendar months to `date`.
///
/// Days past the end of the target month clamp to its last day (Jan 31 + 1 month
/// is Feb 28/29). Results beyond the representable range saturate at [`NaiveDate::MAX`].
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
