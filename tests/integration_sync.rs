mod common;

use std::sync::Arc;

use common::{note_draft, todo_draft, FakeApi, FakeServer};
use dayplan::{ItemStore, StoreUpdate, SyncService};

fn planner(server: &Arc<FakeServer>) -> SyncService<FakeApi> {
    SyncService::new(FakeApi::new(Arc::clone(server)), Arc::new(ItemStore::new()))
}

#[tokio::test]
async fn test_add_then_fetch_yields_superset() {
    let server = FakeServer::new();
    let sync = planner(&server);

    sync.fetch_todos().await.unwrap();
    let before = sync.store().todos();

    let added = sync.add_todo(todo_draft("X", 5, 5)).await.unwrap();
    let after = sync.fetch_todos().await.unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert!(after.iter().any(|t| t.id == added.id && t.title == "X"));
}

#[tokio::test]
async fn test_server_assigns_id_and_broadcast_grows_by_one() {
    let server = FakeServer::new();
    let sync = planner(&server);
    let mut rx = sync.subscribe();

    let added = sync.add_todo(todo_draft("X", 5, 5)).await.unwrap();
    assert_eq!(added.id, "42");

    let item = sync.store().find("42").unwrap();
    assert_eq!(item.title(), "X");

    match rx.try_recv().unwrap() {
        StoreUpdate::Todos(todos) => assert_eq!(todos.len(), 1),
        other => panic!("expected todo update, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_then_resolve_finds_nothing() {
    let server = FakeServer::new();
    let sync = planner(&server);

    let added = sync.add_todo(todo_draft("gone soon", 5, 5)).await.unwrap();
    assert!(sync.store().find(&added.id).is_some());

    sync.delete_todo(&added.id).await.unwrap();
    assert!(sync.store().find(&added.id).is_none());
    assert!(server.todos.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_double_delete_does_not_error() {
    let server = FakeServer::new();
    let sync = planner(&server);

    let added = sync.add_todo(todo_draft("X", 5, 5)).await.unwrap();
    sync.delete_todo(&added.id).await.unwrap();
    // Already consistent: remote confirms again, local removal is a no-op.
    sync.delete_todo(&added.id).await.unwrap();
}

#[tokio::test]
async fn test_transport_failure_mutates_nothing() {
    let server = FakeServer::new();
    let sync = planner(&server);
    let mut rx = sync.subscribe();

    server.fail_next_request();
    let err = sync.add_todo(todo_draft("X", 5, 5)).await.unwrap_err();

    assert!(err.is_transport());
    assert!(sync.store().is_empty());
    assert!(server.todos.lock().unwrap().is_empty());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_fetch_replaces_local_shadow_entirely() {
    let server = FakeServer::new();
    let sync = planner(&server);

    sync.add_todo(todo_draft("mine", 5, 5)).await.unwrap();

    // Another client empties the server behind our back.
    server.todos.lock().unwrap().clear();

    let after = sync.fetch_todos().await.unwrap();
    assert!(after.is_empty());
    assert!(sync.store().todos().is_empty());
}

#[tokio::test]
async fn test_notes_and_todos_are_independent_collections() {
    let server = FakeServer::new();
    let sync = planner(&server);

    let note = sync.add_note(note_draft("plan", 5, 6)).await.unwrap();
    let todo = sync.add_todo(todo_draft("do", 5, 5)).await.unwrap();
    assert_ne!(note.id, todo.id);

    sync.delete_note(&note.id).await.unwrap();
    assert!(sync.store().find(&note.id).is_none());
    assert!(sync.store().find(&todo.id).is_some());
}
