#![allow(dead_code)]
// Shared test fixtures: an in-memory stand-in for the planner server and
// sample item builders.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use dayplan::{AppError, AppResult, NewNote, NewToDo, Note, PlannerApi, ToDo};

/// Server-side state behind the fake API. Ids are assigned from a counter
/// starting at 42.
#[derive(Default)]
pub struct FakeServer {
    pub todos: Mutex<Vec<ToDo>>,
    pub notes: Mutex<Vec<Note>>,
    next_id: AtomicU64,
    fail_next: AtomicBool,
}

impl FakeServer {
    pub fn new() -> Arc<Self> {
        let server = Self::default();
        server.next_id.store(42, Ordering::SeqCst);
        Arc::new(server)
    }

    /// Make the next API call fail with HTTP 503.
    pub fn fail_next_request(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> AppResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AppError::api(503, "service unavailable"));
        }
        Ok(())
    }

    fn next_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

pub struct FakeApi {
    server: Arc<FakeServer>,
}

impl FakeApi {
    pub fn new(server: Arc<FakeServer>) -> Self {
        Self { server }
    }
}

#[async_trait]
impl PlannerApi for FakeApi {
    async fn fetch_todos(&self) -> AppResult<Vec<ToDo>> {
        self.server.check_failure()?;
        Ok(self.server.todos.lock().unwrap().clone())
    }

    async fn create_todo(&self, draft: &NewToDo) -> AppResult<String> {
        self.server.check_failure()?;
        let id = self.server.next_id();
        let todo = draft.clone().into_todo(id.clone());
        self.server.todos.lock().unwrap().push(todo);
        Ok(id)
    }

    async fn delete_todo(&self, id: &str) -> AppResult<()> {
        self.server.check_failure()?;
        // DELETE is idempotent server-side: removing a missing id succeeds.
        self.server.todos.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn fetch_notes(&self) -> AppResult<Vec<Note>> {
        self.server.check_failure()?;
        Ok(self.server.notes.lock().unwrap().clone())
    }

    async fn create_note(&self, draft: &NewNote) -> AppResult<String> {
        self.server.check_failure()?;
        let id = self.server.next_id();
        let note = draft.clone().into_note(id.clone());
        self.server.notes.lock().unwrap().push(note);
        Ok(id)
    }

    async fn delete_note(&self, id: &str) -> AppResult<()> {
        self.server.check_failure()?;
        self.server.notes.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 11, day, hour, 0, 0).unwrap()
}

pub fn todo_draft(title: &str, start_day: u32, end_day: u32) -> NewToDo {
    NewToDo {
        title: title.to_string(),
        description: String::new(),
        completed: false,
        notification: true,
        created_date: at(1, 12),
        start_date_time: at(start_day, 9),
        end_date_time: at(end_day, 10),
    }
}

pub fn note_draft(title: &str, start_day: u32, end_day: u32) -> NewNote {
    NewNote {
        title: title.to_string(),
        description: String::new(),
        start_date_time: at(start_day, 9),
        end_date_time: at(end_day, 10),
    }
}
