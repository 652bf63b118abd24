//! Day keys and meeting records.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar_date::CalendarDate;
use crate::error::{SecretaryError, SecretaryResult};
use crate::participants::ParticipantGroup;

/// Default color on the calendar screen.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Default color on the add-schedule screen.
pub const ADD_SCHEDULE_COLOR: &str = "#22c55e";

/// Swatches offered by the add-schedule form.
pub const PALETTE: [&str; 2] = [ADD_SCHEDULE_COLOR, DEFAULT_COLOR];

/// A `#rrggbb` display color, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color(DEFAULT_COLOR.to_string())
    }
}

impl FromStr for Color {
    type Err = SecretaryError;

    fn from_str(s: &str) -> SecretaryResult<Self> {
        let invalid = || SecretaryError::InvalidColor(s.to_string());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded = match hex.len() {
            6 => hex.to_ascii_lowercase(),
            3 => hex
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase(),
            _ => return Err(invalid()),
        };

        Ok(Color(format!("#{expanded}")))
    }
}

impl TryFrom<String> for Color {
    type Error = SecretaryError;

    fn try_from(value: String) -> SecretaryResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical identifier of one calendar day: `(year, zero-based month, day)`.
///
/// Field order gives chronological ordering. Keys only come from
/// [`make_key`], so every key names a day its month actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawEventKey")]
pub struct EventKey {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawEventKey {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawEventKey> for EventKey {
    type Error = SecretaryError;

    fn try_from(raw: RawEventKey) -> SecretaryResult<Self> {
        make_key(&CalendarDate::new(raw.year, raw.month)?, raw.day)
    }
}

impl EventKey {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Bounds covering every day of `date`, for range scans.
    pub(crate) fn month_bounds(date: &CalendarDate) -> RangeInclusive<EventKey> {
        let first = EventKey {
            year: date.year(),
            month: date.month(),
            day: 0,
        };
        let last = EventKey {
            day: u32::MAX,
            ..first
        };
        first..=last
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Build the key for `day` of the displayed month.
///
/// Days outside `1..=days_in_month` are rejected so no record can be
/// written for a day the grid never shows.
pub fn make_key(date: &CalendarDate, day: u32) -> SecretaryResult<EventKey> {
    if !date.contains_day(day) {
        return Err(SecretaryError::DayOutOfRange {
            year: date.year(),
            month: date.month(),
            day,
            days_in_month: date.days_in_month(),
        });
    }

    Ok(EventKey {
        year: date.year(),
        month: date.month(),
        day,
    })
}

/// One scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub color: Color,
    #[serde(default)]
    pub participants: ParticipantGroup,
}

impl EventRecord {
    /// Trims the title; returns `None` if nothing is left.
    pub fn new(title: &str, color: Color) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        Some(EventRecord {
            title: title.to_string(),
            color,
            participants: ParticipantGroup::default(),
        })
    }

    pub fn with_participants(mut self, participants: ParticipantGroup) -> Self {
        self.participants = participants;
        self
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.color)
    }
}
