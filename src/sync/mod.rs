//! Sync service: the only writer of the item store.
//!
//! Every operation talks to the remote API first and touches local state
//! only after the server has confirmed. Each successful mutation ends with
//! a full-list broadcast so every subscriber re-derives consistent state
//! instead of patching partial diffs.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::api::PlannerApi;
use crate::error::{AppError, AppResult};
use crate::models::{NewNote, NewToDo, Note, ToDo};
use crate::store::ItemStore;
use crate::utils;

/// Full-list change notification published after every confirmed mutation.
#[derive(Debug, Clone)]
pub enum StoreUpdate {
    Notes(Vec<Note>),
    Todos(Vec<ToDo>),
}

const UPDATE_CHANNEL_CAPACITY: usize = 16;

pub struct SyncService<A: PlannerApi> {
    api: A,
    store: Arc<ItemStore>,
    updates: broadcast::Sender<StoreUpdate>,
}

impl<A: PlannerApi> SyncService<A> {
    pub fn new(api: A, store: Arc<ItemStore>) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            api,
            store,
            updates,
        }
    }

    pub fn store(&self) -> Arc<ItemStore> {
        Arc::clone(&self.store)
    }

    /// Subscribe to full-list updates. Late subscribers miss nothing of
    /// consequence: the next confirmed mutation carries the whole list.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreUpdate> {
        self.updates.subscribe()
    }

    /// Retrieve all to-dos and replace the local shadow list entirely.
    pub async fn fetch_todos(&self) -> AppResult<Vec<ToDo>> {
        let todos = self.api.fetch_todos().await?;
        log::info!("[Sync] fetched {} to-dos", todos.len());
        self.store.replace_todos(todos);
        Ok(self.broadcast_todos())
    }

    /// Post a draft to-do; on success the server's generated id turns the
    /// draft into a confirmed item, which is appended to the shadow list.
    pub async fn add_todo(&self, mut draft: NewToDo) -> AppResult<ToDo> {
        draft.title = utils::normalize_title(&draft.title);
        if draft.title.is_empty() {
            return Err(AppError::invalid_input("to-do title cannot be empty"));
        }
        let id = self.api.create_todo(&draft).await?;
        let todo = draft.into_todo(id);
        log::info!("[Sync] added to-do '{}' as id {}", todo.title, todo.id);
        self.store.insert_todo(todo.clone());
        self.broadcast_todos();
        Ok(todo)
    }

    /// Delete remotely, then drop the local copy. Removal is idempotent:
    /// a locally-absent id after a confirmed remote delete means we are
    /// already consistent.
    pub async fn delete_todo(&self, id: &str) -> AppResult<()> {
        self.api.delete_todo(id).await?;
        if !self.store.remove_todo(id) {
            log::warn!("[Sync] to-do {} already absent after remote delete", id);
        }
        self.broadcast_todos();
        Ok(())
    }

    /// Retrieve all notes and replace the local shadow list entirely.
    pub async fn fetch_notes(&self) -> AppResult<Vec<Note>> {
        let notes = self.api.fetch_notes().await?;
        log::info!("[Sync] fetched {} notes", notes.len());
        self.store.replace_notes(notes);
        Ok(self.broadcast_notes())
    }

    pub async fn add_note(&self, mut draft: NewNote) -> AppResult<Note> {
        draft.title = utils::normalize_title(&draft.title);
        if draft.title.is_empty() {
            return Err(AppError::invalid_input("note title cannot be empty"));
        }
        let id = self.api.create_note(&draft).await?;
        let note = draft.into_note(id);
        log::info!("[Sync] added note '{}' as id {}", note.title, note.id);
        self.store.insert_note(note.clone());
        self.broadcast_notes();
        Ok(note)
    }

    pub async fn delete_note(&self, id: &str) -> AppResult<()> {
        self.api.delete_note(id).await?;
        if !self.store.remove_note(id) {
            log::warn!("[Sync] note {} already absent after remote delete", id);
        }
        self.broadcast_notes();
        Ok(())
    }

    fn broadcast_todos(&self) -> Vec<ToDo> {
        let todos = self.store.todos();
        // Send fails only when nobody is subscribed, which is fine.
        let _ = self.updates.send(StoreUpdate::Todos(todos.clone()));
        todos
    }

    fn broadcast_notes(&self) -> Vec<Note> {
        let notes = self.store.notes();
        let _ = self.updates.send(StoreUpdate::Notes(notes.clone()));
        notes
    }
}
