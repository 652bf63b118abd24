//! Who a meeting is addressed to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SecretaryError, SecretaryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParticipantGroup {
    Department,
    Office,
    #[default]
    All,
}

impl ParticipantGroup {
    /// Dropdown order on the add-schedule form.
    pub const ALL: [ParticipantGroup; 3] = [
        ParticipantGroup::Department,
        ParticipantGroup::Office,
        ParticipantGroup::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParticipantGroup::Department => "Department",
            ParticipantGroup::Office => "Office",
            ParticipantGroup::All => "All",
        }
    }
}

impl fmt::Display for ParticipantGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParticipantGroup {
    type Err = SecretaryError;

    fn from_str(s: &str) -> SecretaryResult<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SecretaryError::InvalidParticipants(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all() {
        assert_eq!(ParticipantGroup::default(), ParticipantGroup::All);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("office".parse::<ParticipantGroup>().unwrap(), ParticipantGroup::Office);
        assert_eq!(" DEPARTMENT ".parse::<ParticipantGroup>().unwrap(), ParticipantGroup::Department);
        assert!("faculty".parse::<ParticipantGroup>().is_err());
    }
}
