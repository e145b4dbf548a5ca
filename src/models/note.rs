// file: src/models/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note with a date/time range, as stored by the planner server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl Note {
    pub fn spans_multiple_days(&self) -> bool {
        self.start_date_time.date_naive() != self.end_date_time.date_naive()
    }
}

/// Draft of a note before the server has assigned an id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub description: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl NewNote {
    /// Combine the draft with the server-generated id into a confirmed note.
    pub fn into_note(self, id: String) -> Note {
        Note {
            id,
            title: self.title,
            description: self.description,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
        }
    }
}
