//! In-memory shadow copy of the server's notes and to-dos.
//!
//! The store is the single mutable shared resource in the crate. Reads are
//! open to everyone as snapshots; writes are `pub(crate)` so only the sync
//! service can mutate, and only after the server has confirmed a change.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::{Item, Note, ToDo};

#[derive(Debug, Default)]
struct Shelves {
    notes: HashMap<String, Note>,
    todos: HashMap<String, ToDo>,
}

/// Holds the authoritative local list of items. Keyed by id so that the
/// projector's reverse lookup is O(1). Insertion order is not preserved;
/// callers that need ordering sort the snapshot themselves.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Shelves>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notes.
    pub fn notes(&self) -> Vec<Note> {
        let shelves = self.inner.read().expect("item store lock poisoned");
        shelves.notes.values().cloned().collect()
    }

    /// Snapshot of all to-dos.
    pub fn todos(&self) -> Vec<ToDo> {
        let shelves = self.inner.read().expect("item store lock poisoned");
        shelves.todos.values().cloned().collect()
    }

    /// Snapshot of every item the store knows about.
    pub fn items(&self) -> Vec<Item> {
        let shelves = self.inner.read().expect("item store lock poisoned");
        shelves
            .notes
            .values()
            .cloned()
            .map(Item::Note)
            .chain(shelves.todos.values().cloned().map(Item::Todo))
            .collect()
    }

    /// Look up an item by id. To-dos are checked first, then notes.
    pub fn find(&self, id: &str) -> Option<Item> {
        let shelves = self.inner.read().expect("item store lock poisoned");
        if let Some(todo) = shelves.todos.get(id) {
            return Some(Item::Todo(todo.clone()));
        }
        shelves.notes.get(id).cloned().map(Item::Note)
    }

    pub fn len(&self) -> usize {
        let shelves = self.inner.read().expect("item store lock poisoned");
        shelves.notes.len() + shelves.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn replace_notes(&self, notes: Vec<Note>) {
        let mut shelves = self.inner.write().expect("item store lock poisoned");
        shelves.notes = notes.into_iter().map(|n| (n.id.clone(), n)).collect();
    }

    pub(crate) fn replace_todos(&self, todos: Vec<ToDo>) {
        let mut shelves = self.inner.write().expect("item store lock poisoned");
        shelves.todos = todos.into_iter().map(|t| (t.id.clone(), t)).collect();
    }

    pub(crate) fn insert_note(&self, note: Note) {
        let mut shelves = self.inner.write().expect("item store lock poisoned");
        shelves.notes.insert(note.id.clone(), note);
    }

    pub(crate) fn insert_todo(&self, todo: ToDo) {
        let mut shelves = self.inner.write().expect("item store lock poisoned");
        shelves.todos.insert(todo.id.clone(), todo);
    }

    /// Returns whether a note was actually removed.
    pub(crate) fn remove_note(&self, id: &str) -> bool {
        let mut shelves = self.inner.write().expect("item store lock poisoned");
        shelves.notes.remove(id).is_some()
    }

    /// Returns whether a to-do was actually removed.
    pub(crate) fn remove_todo(&self, id: &str) -> bool {
        let mut shelves = self.inner.write().expect("item store lock poisoned");
        shelves.todos.remove(id).is_some()
    }
}
