//! Screens and the `day` parameter carried between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{SecretaryError, SecretaryResult};

pub const CALENDAR_PATH: &str = "/";
pub const ADD_SCHEDULE_PATH: &str = "/add_schedule";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Calendar,
    AddSchedule { day: Option<u32> },
}

impl Route {
    /// Parse `path[?query]`. Only `day` is read from the query; a value
    /// that is not a number counts as absent.
    pub fn parse(input: &str) -> SecretaryResult<Self> {
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        match path.trim_end_matches('/') {
            "" => Ok(Route::Calendar),
            p if p == ADD_SCHEDULE_PATH => Ok(Route::AddSchedule {
                day: query.and_then(day_param),
            }),
            _ => Err(SecretaryError::UnknownRoute(input.to_string())),
        }
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            Route::Calendar => None,
            Route::AddSchedule { day } => *day,
        }
    }
}

fn day_param(query: &str) -> Option<u32> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "day")
        .and_then(|(_, value)| value.trim().parse().ok())
}

impl FromStr for Route {
    type Err = SecretaryError;

    fn from_str(s: &str) -> SecretaryResult<Self> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Calendar => f.write_str(CALENDAR_PATH),
            Route::AddSchedule { day: None } => f.write_str(ADD_SCHEDULE_PATH),
            Route::AddSchedule { day: Some(day) } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("day", &day.to_string())
                    .finish();
                write!(f, "{ADD_SCHEDULE_PATH}?{query}")
            }
        }
    }
}
