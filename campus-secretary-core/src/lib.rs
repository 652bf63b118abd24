//! Core types for Campus Secretary.
//!
//! This crate holds the calendar model shared by every front-end:
//! - `CalendarDate` and month arithmetic, plus the Sunday-first `MonthGrid`
//! - `EventKey`/`EventRecord` and the day-keyed `EventStore`
//! - `InvitationState` for department responses
//! - `SessionState`, which threads all of the above through pure updates

pub mod calendar_date;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod invitation;
pub mod participants;
pub mod route;
pub mod session;
pub mod store;

pub use calendar_date::{CalendarDate, days_in_month};
pub use config::SecretaryConfig;
pub use error::{SecretaryError, SecretaryResult};
pub use event::{Color, EventKey, EventRecord, make_key};
pub use grid::MonthGrid;
pub use invitation::{InvitationState, Response};
pub use participants::ParticipantGroup;
pub use route::Route;
pub use session::SessionState;
pub use store::EventStore;
