//! Event projection.
//!
//! Turns the item store's notes and to-dos into calendar event batches and
//! owns the single authoritative reverse lookup from an event id back to
//! its source item. Event ids equal item ids, so projecting never invents
//! identity and `resolve` is a plain store lookup.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::models::{Event, EventKind, EventSource, Item, Note, ToDo};
use crate::store::ItemStore;

/// Prefix for demo events so their ids can never collide with server ids.
const STATIC_ID_PREFIX: &str = "static-";

pub struct EventProjector {
    store: Arc<ItemStore>,
}

impl EventProjector {
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }

    /// Notes render as a read-only batch: yellow on black text with a blue
    /// border, matching the planner's house style.
    pub fn note_events(&self) -> EventSource {
        let events = self.store.notes().iter().map(project_note).collect();
        EventSource::new("notes", "yellow", events)
            .with_text_color("black")
            .with_border_color("blue")
    }

    /// To-dos are editable in the calendar.
    pub fn todo_events(&self) -> EventSource {
        let events = self.store.todos().iter().map(project_todo).collect();
        EventSource::new("todos", "green", events).with_border_color("red")
    }

    /// Fixed demo entries with no backing item; selecting one resolves to
    /// nothing.
    pub fn static_events(&self) -> EventSource {
        let events = vec![
            static_event("1", "422 Meeting", (2021, 11, 6, 8, 0), (2021, 11, 6, 21, 26)),
            static_event("2", "ASC", (2021, 11, 5, 21, 26), (2021, 11, 6, 21, 26)),
        ];
        EventSource::new("demo", "lavender", events)
            .with_text_color("black")
            .with_border_color("green")
    }

    /// All batches, in render order.
    pub fn event_sources(&self) -> Vec<EventSource> {
        vec![self.note_events(), self.todo_events(), self.static_events()]
    }

    /// Map an event id back to the item it was projected from. Returns
    /// `None` for ids without a backing item, such as demo events.
    pub fn resolve(&self, event_id: &str) -> Option<Item> {
        self.store.find(event_id)
    }
}

fn project_note(note: &Note) -> Event {
    Event {
        id: note.id.clone(),
        title: note.title.clone(),
        start: note.start_date_time,
        end: note.end_date_time,
        kind: EventKind::Note,
        editable: false,
    }
}

fn project_todo(todo: &ToDo) -> Event {
    Event {
        id: todo.id.clone(),
        title: todo.title.clone(),
        start: todo.start_date_time,
        end: todo.end_date_time,
        kind: EventKind::Todo,
        editable: true,
    }
}

fn static_event(
    suffix: &str,
    title: &str,
    start: (i32, u32, u32, u32, u32),
    end: (i32, u32, u32, u32, u32),
) -> Event {
    Event {
        id: format!("{}{}", STATIC_ID_PREFIX, suffix),
        title: title.to_string(),
        start: Utc
            .with_ymd_and_hms(start.0, start.1, start.2, start.3, start.4, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(end.0, end.1, end.2, end.3, end.4, 0)
            .unwrap(),
        kind: EventKind::Static,
        editable: false,
    }
}
