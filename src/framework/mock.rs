//! # Mock Framework
//!
//! Utilities for testing date-driven behaviour without depending on the host calendar.
//!
//! # Example
//! ```ignore
//! let clock = FixedClock::ymd(2024, 1, 15);
//! let mut system = GymSystem::with_clock(config, clock.clone());
//! // ... register members, record payments ...
//! clock.advance_days(45);
//! assert!(system.equipment_due_for_maintenance().contains(&treadmill));
//! ```

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Days, NaiveDate};

use crate::framework::Clock;

/// A clock pinned to a settable date.
///
/// Clones share the same date, so a test can keep a handle and move time
/// forward after handing the clock to a [`GymSystem`](crate::runtime::GymSystem).
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Rc::new(Cell::new(today)),
        }
    }

    /// Shorthand for tests.
    ///
    /// # Panics
    /// Panics if the year/month/day triple is not a valid calendar date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self::new(date),
            None => panic!("invalid date {year}-{month}-{day}"),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    pub fn advance_days(&self, days: u64) {
        let next = self
            .today
            .get()
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.today.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
