//! One user's session state.
//!
//! Everything a screen needs lives in [`SessionState`]. Each update takes
//! `&self` and returns the next state, leaving the previous one intact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar_date::CalendarDate;
use crate::config::SecretaryConfig;
use crate::error::{SecretaryError, SecretaryResult};
use crate::event::{Color, EventKey, EventRecord, make_key};
use crate::grid::MonthGrid;
use crate::invitation::{InvitationState, Response};
use crate::participants::ParticipantGroup;
use crate::route::Route;
use crate::store::EventStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionState")]
pub struct SessionState {
    date: CalendarDate,
    selected_day: Option<u32>,
    title: String,
    color: Color,
    participants: ParticipantGroup,
    events: EventStore,
    displayed_event: Option<EventRecord>,
    invitations: InvitationState,
    route: Route,
    default_color: Color,
    palette: Vec<Color>,
}

#[derive(Deserialize)]
struct RawSessionState {
    date: CalendarDate,
    selected_day: Option<u32>,
    title: String,
    color: Color,
    participants: ParticipantGroup,
    events: EventStore,
    displayed_event: Option<EventRecord>,
    invitations: InvitationState,
    route: Route,
    default_color: Color,
    palette: Vec<Color>,
}

impl TryFrom<RawSessionState> for SessionState {
    type Error = SecretaryError;

    /// The selected day must exist in the displayed month.
    fn try_from(raw: RawSessionState) -> SecretaryResult<Self> {
        if let Some(day) = raw.selected_day {
            make_key(&raw.date, day)?;
        }

        Ok(SessionState {
            date: raw.date,
            selected_day: raw.selected_day,
            title: raw.title,
            color: raw.color,
            participants: raw.participants,
            events: raw.events,
            displayed_event: raw.displayed_event,
            invitations: raw.invitations,
            route: raw.route,
            default_color: raw.default_color,
            palette: raw.palette,
        })
    }
}

impl SessionState {
    pub fn new(date: CalendarDate, config: &SecretaryConfig) -> Self {
        SessionState {
            date,
            selected_day: None,
            title: String::new(),
            color: config.default_color.clone(),
            participants: ParticipantGroup::default(),
            events: EventStore::new(),
            displayed_event: None,
            invitations: InvitationState::new(config.departments.iter().cloned()),
            route: Route::Calendar,
            default_color: config.default_color.clone(),
            palette: config.palette.clone(),
        }
    }

    // --- Reads ---

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn participants(&self) -> ParticipantGroup {
        self.participants
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// The record shown in the agenda panel.
    pub fn displayed_event(&self) -> Option<&EventRecord> {
        self.displayed_event.as_ref()
    }

    pub fn invitations(&self) -> &InvitationState {
        &self.invitations
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.date)
    }

    pub fn selected_key(&self) -> Option<EventKey> {
        self.selected_day.and_then(|day| make_key(&self.date, day).ok())
    }

    /// Label for the selected day, e.g. "March 5, 2024".
    pub fn selected_label(&self) -> Option<String> {
        self.selected_day.map(|day| self.date.format_day(day))
    }

    // --- Updates ---

    /// Move the grid by `delta` months.
    ///
    /// The selected day survives only if the new month has it.
    pub fn advance_month(&self, delta: i32) -> Self {
        let mut next = self.clone();
        next.date = self.date.advance_month(delta);
        next.selected_day = self.selected_day.filter(|day| next.date.contains_day(*day));
        next.displayed_event = next.lookup_selected();
        debug!(date = %next.date, selected = ?next.selected_day, "month changed");
        next
    }

    /// Select a day of the displayed month and show its record, if any.
    pub fn select_day(&self, day: u32) -> Self {
        if !self.date.contains_day(day) {
            debug!(day, date = %self.date, "select_day ignored: not in month");
            return self.clone();
        }

        let mut next = self.clone();
        next.selected_day = Some(day);
        next.displayed_event = next.lookup_selected();
        next
    }

    pub fn clear_selection(&self) -> Self {
        let mut next = self.clone();
        next.selected_day = None;
        next.displayed_event = None;
        next
    }

    pub fn set_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title = title.into();
        next
    }

    pub fn set_color(&self, color: Color) -> Self {
        let mut next = self.clone();
        next.color = color;
        next
    }

    pub fn set_participants(&self, participants: ParticipantGroup) -> Self {
        let mut next = self.clone();
        next.participants = participants;
        next
    }

    /// Save the form as the selected day's meeting.
    ///
    /// The write goes through [`EventStore::add_event`]; when it leaves the
    /// store unchanged (no day selected, blank title) nothing else changes
    /// either. Otherwise the saved record becomes the displayed event and
    /// the title input is cleared.
    pub fn submit_event(&self) -> Self {
        let key = self.selected_key();
        let events = self
            .events
            .add_event(key, &self.title, self.color.clone(), self.participants);
        if events == self.events {
            return self.clone();
        }

        let mut next = self.clone();
        next.displayed_event = key.and_then(|key| events.lookup_event(&key)).cloned();
        next.events = events;
        next.title.clear();
        next
    }

    pub fn respond(&self, department: &str, response: Response) -> Self {
        let mut next = self.clone();
        next.invitations = self.invitations.record_response(department, response);
        next
    }

    /// Switch screens.
    ///
    /// The add-schedule screen takes its selection from the route alone: the
    /// carried day is selected when the displayed month has it, otherwise
    /// the selection is cleared and the day dropped from the stored route.
    /// Opening it also resets the form color to the first palette swatch.
    /// The calendar screen keeps the selection. Both screens share one event
    /// store.
    pub fn navigate(&self, route: Route) -> Self {
        let next = match route {
            Route::Calendar => {
                let mut next = self.clone();
                next.color = self.default_color.clone();
                next.route = Route::Calendar;
                next
            }
            Route::AddSchedule { day } => {
                let day = day.filter(|day| self.date.contains_day(*day));
                let mut next = match day {
                    Some(day) => self.select_day(day),
                    None => self.clear_selection(),
                };
                if let Some(first) = self.palette.first() {
                    next.color = first.clone();
                }
                next.route = Route::AddSchedule { day };
                next
            }
        };

        debug!(route = %next.route, selected = ?next.selected_day, "navigate");
        next
    }

    /// Route to the add-schedule screen for the current selection.
    pub fn add_schedule_route(&self) -> Route {
        Route::AddSchedule {
            day: self.selected_day,
        }
    }

    /// Pretty JSON of the whole session.
    pub fn snapshot(&self) -> SecretaryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn lookup_selected(&self) -> Option<EventRecord> {
        self.selected_key()
            .and_then(|key| self.events.lookup_event(&key))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(year: i32, month: u32) -> SessionState {
        SessionState::new(
            CalendarDate::new(year, month).unwrap(),
            &SecretaryConfig::default(),
        )
    }

    #[test]
    fn submit_writes_displays_and_clears_title() {
        let s = session(2024, 2)
            .select_day(14)
            .set_title("Budget Review")
            .set_color("#3b82f6".parse().unwrap())
            .submit_event();

        let key = s.selected_key().unwrap();
        assert_eq!(s.events().lookup_event(&key).unwrap().title, "Budget Review");
        assert_eq!(s.displayed_event().unwrap().title, "Budget Review");
        assert_eq!(s.title(), "");
    }

    #[test]
    fn submit_without_day_is_a_no_op() {
        let before = session(2024, 2).set_title("Budget Review");
        let after = before.submit_event();
        assert_eq!(after, before);
        assert_eq!(after.title(), "Budget Review");
    }

    #[test]
    fn submit_with_blank_title_is_a_no_op() {
        let before = session(2024, 2).select_day(3).set_title("   ");
        let after = before.submit_event();
        assert_eq!(after, before);
        assert!(after.events().is_empty());
    }

    #[test]
    fn submit_keeps_participant_group() {
        let s = session(2024, 2)
            .select_day(1)
            .set_title("Deans' meeting")
            .set_participants(ParticipantGroup::Department)
            .submit_event();
        assert_eq!(s.displayed_event().unwrap().participants, ParticipantGroup::Department);
    }

    #[test]
    fn resubmitting_the_same_meeting_changes_nothing() {
        let saved = session(2024, 2).select_day(8).set_title("Audit").submit_event();
        let again = saved.set_title("Audit");
        assert_eq!(again.submit_event(), again);
    }

    #[test]
    fn selecting_a_day_shows_its_record() {
        let s = session(2024, 2).select_day(10).set_title("Audit").submit_event();

        let other = s.select_day(11);
        assert!(other.displayed_event().is_none());

        let back = other.select_day(10);
        assert_eq!(back.displayed_event().unwrap().title, "Audit");
    }

    #[test]
    fn select_day_out_of_range_is_ignored() {
        let s = session(2023, 1);
        assert_eq!(s.select_day(29), s);
        assert_eq!(s.select_day(0), s);
    }

    #[test]
    fn advance_month_drops_day_missing_from_new_month() {
        let jan = session(2023, 0).select_day(31);
        let feb = jan.advance_month(1);
        assert_eq!(feb.selected_day(), None);

        let back = feb.advance_month(-1);
        assert_eq!(back.date(), jan.date());
    }

    #[test]
    fn advance_month_refreshes_displayed_event() {
        let s = session(2024, 2).select_day(5).set_title("Review").submit_event();
        let next = s.advance_month(1);
        assert_eq!(next.selected_day(), Some(5));
        assert!(next.displayed_event().is_none());

        let back = next.advance_month(-1);
        assert_eq!(back.displayed_event().unwrap().title, "Review");
    }

    #[test]
    fn clear_selection_hides_agenda() {
        let s = session(2024, 2).select_day(5).set_title("Review").submit_event();
        let cleared = s.clear_selection();
        assert_eq!(cleared.selected_day(), None);
        assert!(cleared.displayed_event().is_none());
        assert_eq!(cleared.events().len(), 1);
    }

    #[test]
    fn respond_updates_tally() {
        let s = session(2024, 2)
            .respond("CAS", Response::Accepted)
            .respond("CCS", Response::Accepted)
            .respond("CAS", Response::Declined);
        assert_eq!(s.invitations().count_accepted(), 1);
    }

    #[test]
    fn navigate_to_add_schedule_selects_day() {
        let s = session(2024, 2).navigate(Route::AddSchedule { day: Some(12) });
        assert_eq!(s.selected_day(), Some(12));
        assert_eq!(s.route(), Route::AddSchedule { day: Some(12) });
        assert_eq!(s.color().as_str(), "#22c55e");
    }

    #[test]
    fn navigate_to_add_schedule_without_day_clears_selection() {
        let s = session(2024, 2)
            .select_day(5)
            .navigate(Route::AddSchedule { day: None });
        assert_eq!(s.selected_day(), None);
        assert!(s.displayed_event().is_none());

        let saved = s.set_title("Board").submit_event();
        assert!(saved.events().is_empty());
        assert_eq!(saved.title(), "Board");
    }

    #[test]
    fn navigate_drops_day_missing_from_month() {
        let s = session(2024, 1)
            .select_day(5)
            .navigate(Route::AddSchedule { day: Some(40) });
        assert_eq!(s.route(), Route::AddSchedule { day: None });
        assert_eq!(s.route().to_string(), "/add_schedule");
        assert_eq!(s.selected_day(), None);
    }

    #[test]
    fn navigate_to_add_schedule_replaces_selection() {
        let s = session(2024, 2)
            .select_day(5)
            .navigate(Route::AddSchedule { day: Some(9) });
        assert_eq!(s.selected_day(), Some(9));
    }

    #[test]
    fn navigate_to_calendar_keeps_selection() {
        let s = session(2024, 2)
            .navigate(Route::AddSchedule { day: Some(9) })
            .navigate(Route::Calendar);
        assert_eq!(s.selected_day(), Some(9));
        assert_eq!(s.route(), Route::Calendar);
    }

    #[test]
    fn add_schedule_saves_into_shared_store() {
        let s = session(2024, 2)
            .navigate(Route::parse("/add_schedule?day=9").unwrap())
            .set_title("Faculty meeting")
            .submit_event()
            .navigate(Route::Calendar)
            .select_day(9);

        let shown = s.displayed_event().unwrap();
        assert_eq!(shown.title, "Faculty meeting");
        assert_eq!(shown.color.as_str(), "#22c55e");
        assert_eq!(s.color().as_str(), "#3b82f6");
    }

    #[test]
    fn add_schedule_route_carries_selection() {
        assert_eq!(session(2024, 2).add_schedule_route(), Route::AddSchedule { day: None });
        assert_eq!(
            session(2024, 2).select_day(4).add_schedule_route().to_string(),
            "/add_schedule?day=4"
        );
    }

    #[test]
    fn snapshot_round_trips() {
        let s = session(2024, 2)
            .select_day(14)
            .set_title("Budget Review")
            .submit_event()
            .respond("CAS", Response::Accepted);

        let json = s.snapshot().unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn snapshot_with_phantom_selection_is_rejected() {
        let s = session(2024, 1).select_day(5);
        let mut json = serde_json::to_value(&s).unwrap();

        json["selected_day"] = 40.into();
        assert!(serde_json::from_value::<SessionState>(json.clone()).is_err());

        json["selected_day"] = 29.into();
        let back: SessionState = serde_json::from_value(json).unwrap();
        assert_eq!(back.selected_day(), Some(29));
    }
}
