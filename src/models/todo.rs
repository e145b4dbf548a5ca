// file: src/models/todo.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A to-do entry as stored by the planner server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub notification: bool,
    pub created_date: DateTime<Utc>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl ToDo {
    pub fn is_open(&self) -> bool {
        !self.completed
    }

    pub fn is_past_due(&self) -> bool {
        !self.completed && self.end_date_time < Utc::now()
    }
}

/// Draft of a to-do before the server has assigned an id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewToDo {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub notification: bool,
    pub created_date: DateTime<Utc>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl NewToDo {
    /// Combine the draft with the server-generated id into a confirmed to-do.
    pub fn into_todo(self, id: String) -> ToDo {
        ToDo {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            notification: self.notification,
            created_date: self.created_date,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
        }
    }
}
