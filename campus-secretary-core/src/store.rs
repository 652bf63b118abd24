//! Day-keyed event store.
//!
//! Holds at most one [`EventRecord`] per [`EventKey`]. Updates are
//! copy-on-write: every write returns a new store and leaves the receiver
//! untouched, so a front-end can re-render from the returned value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar_date::CalendarDate;
use crate::event::{Color, EventKey, EventRecord};
use crate::participants::ParticipantGroup;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    #[serde(with = "entries")]
    events: BTreeMap<EventKey, EventRecord>,
}

/// Serialized as a list of entries; JSON object keys must be strings.
mod entries {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::event::{EventKey, EventRecord};

    #[derive(Serialize)]
    struct EntryRef<'a> {
        key: &'a EventKey,
        #[serde(flatten)]
        record: &'a EventRecord,
    }

    #[derive(Deserialize)]
    struct Entry {
        key: EventKey,
        #[serde(flatten)]
        record: EventRecord,
    }

    pub fn serialize<S: Serializer>(
        events: &BTreeMap<EventKey, EventRecord>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(events.iter().map(|(key, record)| EntryRef { key, record }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<EventKey, EventRecord>, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.key, e.record)).collect())
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a meeting for the selected day.
    ///
    /// A missing key (no day selected) or a blank title leaves the store as
    /// it was. An existing record for the key is replaced whole.
    pub fn add_event(
        &self,
        key: Option<EventKey>,
        title: &str,
        color: Color,
        participants: ParticipantGroup,
    ) -> EventStore {
        let Some(key) = key else {
            debug!("add_event ignored: no day selected");
            return self.clone();
        };
        let Some(record) = EventRecord::new(title, color) else {
            debug!(%key, "add_event ignored: blank title");
            return self.clone();
        };

        let mut events = self.events.clone();
        if let Some(previous) = events.insert(key, record.with_participants(participants)) {
            debug!(%key, replaced = %previous, "event replaced");
        } else {
            debug!(%key, "event added");
        }
        EventStore { events }
    }

    pub fn lookup_event(&self, key: &EventKey) -> Option<&EventRecord> {
        self.events.get(key)
    }

    /// Records of the displayed month, in day order.
    pub fn events_in_month(&self, date: &CalendarDate) -> Vec<(u32, &EventRecord)> {
        self.events
            .range(EventKey::month_bounds(date))
            .map(|(key, record)| (key.day(), record))
            .collect()
    }

    /// All records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&EventKey, &EventRecord)> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
