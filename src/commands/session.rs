use anyhow::Result;
use campus_secretary_core::{
    CalendarDate, Color, ParticipantGroup, Response, Route, SecretaryConfig, SessionState,
};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::render::{Render, render_agenda, render_month, render_offices, render_selected, swatch};

/// One step the user can take from a screen's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    PreviousMonth,
    NextMonth,
    SelectDay,
    AddSchedule,
    OpenAddSchedule,
    MeetingTitle,
    Participants,
    ChooseColor,
    SaveSchedule,
    BackToCalendar,
    Invitations,
    Snapshot,
    Quit,
}

impl MenuItem {
    fn label(&self) -> &'static str {
        match self {
            MenuItem::PreviousMonth => "← Previous month",
            MenuItem::NextMonth => "Next month →",
            MenuItem::SelectDay => "Select day",
            MenuItem::AddSchedule => "Add schedule",
            MenuItem::OpenAddSchedule => "Open add-schedule screen",
            MenuItem::MeetingTitle => "Meeting title",
            MenuItem::Participants => "Participants",
            MenuItem::ChooseColor => "Choose color",
            MenuItem::SaveSchedule => "Save schedule",
            MenuItem::BackToCalendar => "Back to calendar",
            MenuItem::Invitations => "Invitations",
            MenuItem::Snapshot => "Show session JSON",
            MenuItem::Quit => "Quit",
        }
    }
}

fn menu(route: Route) -> &'static [MenuItem] {
    match route {
        Route::Calendar => &[
            MenuItem::PreviousMonth,
            MenuItem::NextMonth,
            MenuItem::SelectDay,
            MenuItem::AddSchedule,
            MenuItem::OpenAddSchedule,
            MenuItem::Invitations,
            MenuItem::Snapshot,
            MenuItem::Quit,
        ],
        Route::AddSchedule { .. } => &[
            MenuItem::PreviousMonth,
            MenuItem::NextMonth,
            MenuItem::SelectDay,
            MenuItem::MeetingTitle,
            MenuItem::Participants,
            MenuItem::ChooseColor,
            MenuItem::SaveSchedule,
            MenuItem::BackToCalendar,
            MenuItem::Quit,
        ],
    }
}

pub fn run(date: CalendarDate, route: Route, config: &SecretaryConfig, dump: bool) -> Result<()> {
    let mut session = SessionState::new(date, config).navigate(route);

    loop {
        println!();
        println!("{}", render_screen(&session, config));
        println!();

        let items = menu(session.route());
        let labels: Vec<&str> = items.iter().map(|i| i.label()).collect();
        let choice = Select::new()
            .with_prompt("  What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        session = match items[choice] {
            MenuItem::PreviousMonth => session.advance_month(-1),
            MenuItem::NextMonth => session.advance_month(1),
            MenuItem::SelectDay => {
                let day = prompt_day(&session.date())?;
                session.select_day(day)
            }
            MenuItem::AddSchedule => {
                let title = prompt_title()?;
                let color = prompt_color(session.color())?;
                submit(&session.set_title(title).set_color(color))
            }
            MenuItem::OpenAddSchedule => session.navigate(session.add_schedule_route()),
            MenuItem::MeetingTitle => session.set_title(prompt_title()?),
            MenuItem::Participants => session.set_participants(prompt_participants(session.participants())?),
            MenuItem::ChooseColor => {
                let color = prompt_palette(session.palette(), session.color())?;
                session.set_color(color)
            }
            MenuItem::SaveSchedule => submit(&session),
            MenuItem::BackToCalendar => session.navigate(Route::Calendar),
            MenuItem::Invitations => invitations(session)?,
            MenuItem::Snapshot => {
                println!("{}", session.snapshot()?);
                session
            }
            MenuItem::Quit => break,
        };
    }

    debug!(events = session.events().len(), "session ended");

    if dump {
        println!("{}", session.snapshot()?);
    }

    Ok(())
}

/// Submit the form, telling the user when nothing was saved.
fn submit(session: &SessionState) -> SessionState {
    if session.selected_day().is_none() {
        eprintln!("  {}", "Select a day first".yellow());
    } else if session.title().trim().is_empty() {
        eprintln!("  {}", "Meeting title is empty".yellow());
    }

    let next = session.submit_event();
    if next != *session {
        if let Some(event) = next.displayed_event() {
            println!("{}", format!("  Saved: {}", event.title).green());
        }
    }

    next
}

fn render_screen(session: &SessionState, config: &SecretaryConfig) -> String {
    let today = chrono::Local::now().date_naive();
    let grid = render_month(&session.grid(), session.events(), session.selected_day(), Some(today));
    let selected = render_selected(&session.date(), session.selected_day());

    match session.route() {
        Route::Calendar => [
            "Campus Secretary".bold().to_string(),
            render_offices(&config.offices),
            String::new(),
            grid,
            String::new(),
            selected,
            render_agenda(session),
        ]
        .join("\n"),
        Route::AddSchedule { .. } => {
            let title = if session.title().is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                session.title().to_string()
            };
            [
                "Add Schedule".bold().to_string(),
                String::new(),
                grid,
                String::new(),
                "Schedule Details".bold().to_string(),
                format!("   {}", selected),
                format!("   Meeting Title: {}", title),
                format!("   Participants:  {}", session.participants()),
                format!("   Color:         {}", session.color().render()),
            ]
            .join("\n")
        }
    }
}

fn prompt_day(date: &CalendarDate) -> Result<u32> {
    let last = date.days_in_month();
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  Day (1-{})", last))
            .interact_text()?;
        match input.trim().parse::<u32>() {
            Ok(day) if date.contains_day(day) => return Ok(day),
            _ => eprintln!("  {}", format!("{} has no day \"{}\"", date, input.trim()).red()),
        }
    }
}

fn prompt_title() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("  Meeting title")
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_color(current: &Color) -> Result<Color> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Color code")
            .default(current.to_string())
            .interact_text()?;
        match input.parse::<Color>() {
            Ok(color) => return Ok(color),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_palette(palette: &[Color], current: &Color) -> Result<Color> {
    if palette.is_empty() {
        return prompt_color(current);
    }

    let items: Vec<String> = palette.iter().map(|c| format!("{} {}", swatch(c), c)).collect();
    let default = palette.iter().position(|c| c == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Choose color")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(palette[selection].clone())
}

fn prompt_participants(current: ParticipantGroup) -> Result<ParticipantGroup> {
    let default = ParticipantGroup::ALL
        .iter()
        .position(|g| *g == current)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Participants")
        .items(&ParticipantGroup::ALL)
        .default(default)
        .interact()?;

    Ok(ParticipantGroup::ALL[selection])
}

/// Invitation list: pick a department, then accept or decline.
fn invitations(mut session: SessionState) -> Result<SessionState> {
    loop {
        println!();
        println!("{}", "Invitations".bold());
        println!("{}", session.invitations().render());
        println!();

        let departments: Vec<String> = session
            .invitations()
            .departments()
            .map(|(d, _)| d.to_string())
            .collect();
        let mut items: Vec<String> = departments.clone();
        items.push("Back".to_string());

        let selection = Select::new()
            .with_prompt("  Respond for")
            .items(&items)
            .default(0)
            .interact()?;

        let Some(department) = departments.get(selection) else {
            return Ok(session);
        };

        let responses = [Response::Accepted, Response::Declined];
        let labels = ["Accept", "Decline", "Cancel"];
        let choice = Select::new()
            .with_prompt(format!("  {}", department))
            .items(&labels)
            .default(0)
            .interact()?;

        if let Some(response) = responses.get(choice) {
            session = session.respond(department, *response);
        }
    }
}
