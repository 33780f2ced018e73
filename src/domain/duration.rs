//! Support duration arithmetic
//!
//! Durations are expressed in whole years and months using the same coarse
//! calendar the chart tooltips have always used: 365-day years and 30-day
//! months.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Length of a support window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportDuration {
    /// Total days in the window
    pub days: i64,
    /// Whole years
    pub years: i64,
    /// Remaining whole months
    pub months: i64,
}

impl SupportDuration {
    /// Duration between two dates; zero when either bound is missing
    pub fn between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::from_days((end - start).num_days()),
            _ => Self::default(),
        }
    }

    fn from_days(days: i64) -> Self {
        let days = days.max(0);
        Self {
            days,
            years: days / DAYS_PER_YEAR,
            months: (days % DAYS_PER_YEAR) / DAYS_PER_MONTH,
        }
    }
}

impl fmt::Display for SupportDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months", self.years, self.months)
    }
}
