//! Meeting invitations and department responses.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Departments invited when no configuration overrides the list.
pub const DEFAULT_DEPARTMENTS: [&str; 6] = ["CAS", "CCS", "CBA", "CTE", "CEA", "CON"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Response {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Response::Pending => "Pending",
            Response::Accepted => "Accepted",
            Response::Declined => "Declined",
        };
        f.write_str(label)
    }
}

/// Response status per invited department.
///
/// Departments are fixed at construction; entries are only ever updated,
/// never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationState {
    responses: BTreeMap<String, Response>,
}

impl Default for InvitationState {
    fn default() -> Self {
        Self::new(DEFAULT_DEPARTMENTS)
    }
}

impl InvitationState {
    /// Every department starts out `Pending`.
    pub fn new<I, S>(departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InvitationState {
            responses: departments
                .into_iter()
                .map(|d| (d.into(), Response::Pending))
                .collect(),
        }
    }

    /// Set `department`'s response; last response wins.
    ///
    /// An unknown department leaves the state unchanged.
    pub fn record_response(&self, department: &str, response: Response) -> InvitationState {
        let mut next = self.clone();
        match next.responses.get_mut(department) {
            Some(entry) => {
                debug!(department, from = %entry, to = %response, "invitation response");
                *entry = response;
            }
            None => debug!(department, "response for unknown department ignored"),
        }
        next
    }

    pub fn status(&self, department: &str) -> Option<Response> {
        self.responses.get(department).copied()
    }

    pub fn count(&self, response: Response) -> usize {
        self.responses.values().filter(|r| **r == response).count()
    }

    pub fn count_accepted(&self) -> usize {
        self.count(Response::Accepted)
    }

    pub fn departments(&self) -> impl Iterator<Item = (&str, Response)> {
        self.responses.iter().map(|(d, r)| (d.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
