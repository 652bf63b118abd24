//! Terminal rendering for Campus Secretary types.
//!
//! Extension traits that add colored output to campus-secretary-core types
//! using owo_colors.

use campus_secretary_core::grid::WEEKDAY_HEADERS;
use campus_secretary_core::{
    CalendarDate, Color, EventRecord, EventStore, InvitationState, MonthGrid, Response,
    SessionState,
};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// A filled dot in the event's own color.
pub fn swatch(color: &Color) -> String {
    let (r, g, b) = color.rgb();
    "●".truecolor(r, g, b).to_string()
}

impl Render for Color {
    fn render(&self) -> String {
        format!("{} {}", swatch(self), self.as_str().dimmed())
    }
}

impl Render for EventRecord {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            swatch(&self.color),
            self.title.bold(),
            format!("[{}]", self.participants).dimmed()
        )
    }
}

impl Render for Response {
    fn render(&self) -> String {
        match self {
            Response::Pending => self.to_string().dimmed().to_string(),
            Response::Accepted => self.to_string().green().to_string(),
            Response::Declined => self.to_string().red().to_string(),
        }
    }
}

impl Render for InvitationState {
    fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .departments()
            .map(|(department, response)| format!("   {:<8} {}", department, response.render()))
            .collect();

        lines.push(String::new());
        lines.push(format!(
            "   {} {}/{}",
            "Accepted:".bold(),
            self.count_accepted(),
            self.len()
        ));
        lines.join("\n")
    }
}

/// Render a month grid with event markers and the selected day.
///
/// `today` is highlighted when it falls in the displayed month.
pub fn render_month(
    grid: &MonthGrid,
    events: &EventStore,
    selected: Option<u32>,
    today: Option<NaiveDate>,
) -> String {
    let date = grid.date;
    let mut lines = Vec::new();

    lines.push(format!("{:^28}", date.to_string()).bold().to_string());
    lines.push(
        WEEKDAY_HEADERS
            .iter()
            .map(|d| format!("{:>4}", &d[..2]))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    let marked: Vec<(u32, &EventRecord)> = events.events_in_month(&date);
    let today_day = today
        .filter(|t| t.year() == date.year() && t.month0() == date.month())
        .map(|t| t.day());

    for week in &grid.weeks {
        let mut line = String::new();
        for cell in week {
            line.push_str(&match cell {
                None => "    ".to_string(),
                Some(day) => render_cell(*day, &marked, selected, today_day),
            });
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn render_cell(
    day: u32,
    marked: &[(u32, &EventRecord)],
    selected: Option<u32>,
    today: Option<u32>,
) -> String {
    let number = format!("{:>3}", day);
    let number = if selected == Some(day) {
        number.reversed().to_string()
    } else if today == Some(day) {
        number.underline().to_string()
    } else {
        number
    };

    match marked.iter().find(|(d, _)| *d == day) {
        Some((_, record)) => format!("{}{}", number, swatch(&record.color)),
        None => format!("{} ", number),
    }
}

/// The agenda panel for the current selection.
pub fn render_agenda(session: &SessionState) -> String {
    let mut lines = vec!["Meeting Agenda".bold().to_string()];

    match (session.selected_label(), session.displayed_event()) {
        (None, _) => lines.push("   Select a date to view the agenda.".dimmed().to_string()),
        (Some(label), None) => {
            lines.push(format!("   {}", label));
            lines.push("   No schedule for this day.".dimmed().to_string());
        }
        (Some(label), Some(event)) => {
            lines.push(format!("   {}", label));
            lines.push(format!("   {}", event.render()));
        }
    }

    lines.join("\n")
}

/// Header line for the selected date.
pub fn render_selected(date: &CalendarDate, selected: Option<u32>) -> String {
    let label = match selected {
        Some(day) => date.format_day(day).bold().to_string(),
        None => "None".dimmed().to_string(),
    };
    format!("Selected Date: {}", label)
}

/// Sidebar list of offices.
pub fn render_offices(offices: &[String]) -> String {
    format!("{} {}", "Offices:".bold(), offices.join(" · ").dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_secretary_core::{ParticipantGroup, SecretaryConfig, make_key};

    fn march_2024() -> CalendarDate {
        CalendarDate::new(2024, 2).unwrap()
    }

    #[test]
    fn month_header_and_weeks() {
        let grid = MonthGrid::new(march_2024());
        let out = render_month(&grid, &EventStore::new(), None, None);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("March 2024"));
        assert!(lines[1].contains("Su"));
        // header, weekday row and one line per week
        assert_eq!(lines.len(), 2 + grid.weeks.len());
        assert!(out.contains(" 31"));
    }

    #[test]
    fn marked_day_gets_swatch() {
        let date = march_2024();
        let key = make_key(&date, 14).unwrap();
        let store = EventStore::new().add_event(
            Some(key),
            "Budget Review",
            Color::default(),
            ParticipantGroup::All,
        );

        let out = render_month(&MonthGrid::new(date), &store, None, None);
        assert!(out.contains('●'));

        let empty = render_month(&MonthGrid::new(date), &EventStore::new(), None, None);
        assert!(!empty.contains('●'));
    }

    #[test]
    fn agenda_states() {
        let session = SessionState::new(march_2024(), &SecretaryConfig::default());
        assert!(render_agenda(&session).contains("Select a date"));

        let selected = session.select_day(5);
        let out = render_agenda(&selected);
        assert!(out.contains("March 5, 2024"));
        assert!(out.contains("No schedule for this day."));

        let saved = selected.set_title("Budget Review").submit_event();
        assert!(render_agenda(&saved).contains("Budget Review"));
    }

    #[test]
    fn invitation_tally_line() {
        let state = InvitationState::new(["CAS", "CCS"]).record_response("CAS", Response::Accepted);
        let out = state.render();
        assert!(out.contains("CAS"));
        assert!(out.contains("1/2"));
    }

    #[test]
    fn selected_none() {
        assert!(render_selected(&march_2024(), None).contains("None"));
        assert!(render_selected(&march_2024(), Some(9)).contains("March 9, 2024"));
    }
}
