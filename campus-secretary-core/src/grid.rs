//! Month grid layout.

use crate::calendar_date::CalendarDate;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weeks of the displayed month, Sunday-first.
///
/// Cells before the 1st and after the last day are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub date: CalendarDate,
    pub weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    pub fn new(date: CalendarDate) -> Self {
        let offset = date.first_weekday() as usize;
        let days = date.days_in_month();

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut column = offset;

        for day in 1..=days {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        MonthGrid { date, weeks }
    }

    /// Day numbers in display order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }
}
