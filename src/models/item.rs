// file: src/models/item.rs
use serde::{Deserialize, Serialize};

use super::{Note, ToDo};

/// Discriminates the two item kinds the store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Note,
    Todo,
}

/// A record owned by the item store: either a note or a to-do.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Note(Note),
    Todo(ToDo),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Note(n) => &n.id,
            Item::Todo(t) => &t.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Note(n) => &n.title,
            Item::Todo(t) => &t.title,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Note(_) => ItemKind::Note,
            Item::Todo(_) => ItemKind::Todo,
        }
    }

    pub fn as_note(&self) -> Option<&Note> {
        match self {
            Item::Note(n) => Some(n),
            Item::Todo(_) => None,
        }
    }

    pub fn as_todo(&self) -> Option<&ToDo> {
        match self {
            Item::Todo(t) => Some(t),
            Item::Note(_) => None,
        }
    }
}

impl From<Note> for Item {
    fn from(note: Note) -> Self {
        Item::Note(note)
    }
}

impl From<ToDo> for Item {
    fn from(todo: ToDo) -> Self {
        Item::Todo(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_item_accessors() {
        let note = Note {
            id: "n1".to_string(),
            title: "Groceries".to_string(),
            description: String::new(),
            start_date_time: Utc.with_ymd_and_hms(2021, 11, 5, 8, 0, 0).unwrap(),
            end_date_time: Utc.with_ymd_and_hms(2021, 11, 5, 9, 0, 0).unwrap(),
        };

        let item = Item::from(note.clone());
        assert_eq!(item.id(), "n1");
        assert_eq!(item.title(), "Groceries");
        assert_eq!(item.kind(), ItemKind::Note);
        assert_eq!(item.as_note(), Some(&note));
        assert!(item.as_todo().is_none());
    }
}
