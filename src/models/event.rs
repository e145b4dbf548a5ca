// file: src/models/event.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which kind of record an event was projected from. `Static` events are
/// fixed demo entries with no backing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Note,
    Todo,
    Static,
}

/// A calendar-displayable projection of an item. Derived, never persisted;
/// regenerated from the item store on every render pass. The id equals the
/// source item's id, so it maps back to exactly one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: EventKind,
    pub editable: bool,
}

impl Event {
    /// Whether this event's interval touches the given day: it starts on
    /// that day, or it started earlier and has not ended before it.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        let start = self.start.date_naive();
        let end = self.end.date_naive();
        start == day || (start < day && end >= day)
    }

    pub fn is_happening_now(&self) -> bool {
        let now = Utc::now();
        now >= self.start && now <= self.end
    }
}
