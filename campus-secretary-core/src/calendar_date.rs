//! Reference date for the displayed month.
//!
//! Months are zero-based (`0` = January, `11` = December) throughout the
//! crate. The CLI converts from the one-based months users type.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SecretaryError, SecretaryResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Equivalent to "day 0 of the next month". A month index past 11 rolls
/// into the following years, so this never fails.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let year = year.saturating_add((month / 12) as i32);
    match month % 12 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// The year and zero-based month currently shown in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u32,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = SecretaryError;

    fn try_from(raw: RawCalendarDate) -> SecretaryResult<Self> {
        CalendarDate::new(raw.year, raw.month)
    }
}

impl CalendarDate {
    pub fn new(year: i32, month: u32) -> SecretaryResult<Self> {
        if month > 11 {
            return Err(SecretaryError::InvalidMonth(month));
        }
        Ok(CalendarDate { year, month })
    }

    /// Reference date for the current local month.
    pub fn today() -> Self {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Shift by `delta` months, carrying into the year.
    ///
    /// The whole date clamps at the `i32` year bounds: December of
    /// `i32::MAX` and January of `i32::MIN` are fixed points.
    pub fn advance_month(&self, delta: i32) -> CalendarDate {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        let first = i64::from(i32::MIN) * 12;
        let last = i64::from(i32::MAX) * 12 + 11;
        let total = total.clamp(first, last);

        CalendarDate {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn contains_day(&self, day: u32) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    /// Calendar day within this month, if chrono can represent it.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Column of the 1st in a Sunday-first week (`0` = Sunday).
    pub fn first_weekday(&self) -> u32 {
        self.date_of(1)
            .map_or(0, |d| d.weekday().num_days_from_sunday())
    }

    /// Human label for a selected day, e.g. "March 5, 2024".
    pub fn format_day(&self, day: u32) -> String {
        format!("{} {}, {}", self.month_name(), day, self.year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
