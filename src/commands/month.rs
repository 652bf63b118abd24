use anyhow::Result;
use campus_secretary_core::{CalendarDate, EventStore, MonthGrid};

use crate::render::render_month;

pub fn run(date: CalendarDate) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let grid = MonthGrid::new(date);

    println!("{}", render_month(&grid, &EventStore::new(), None, Some(today)));

    Ok(())
}
