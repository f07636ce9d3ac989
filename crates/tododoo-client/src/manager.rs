//! List/Todo Manager
//!
//! Each operation performs its remote call and returns the `Action` to
//! dispatch. Nothing touches local state until the call has succeeded.

use log::info;

use crate::backend::TodoBackend;
use crate::error::ApiResult;
use crate::models::{NewList, NewTodo, TodoPatch};
use crate::state::{Action, TodoState};

/// Remote operations for lists and todos
#[derive(Debug, Clone)]
pub struct TodoManager<B> {
    backend: B,
}

impl<B: TodoBackend> TodoManager<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    // ========================
    // Initial Load
    // ========================

    pub async fn load_lists(&self) -> ApiResult<Action> {
        let lists = self.backend.fetch_lists().await?;
        info!("Loaded {} lists", lists.len());
        Ok(Action::ListsLoaded(lists))
    }

    pub async fn load_todos(&self) -> ApiResult<Action> {
        let todos = self.backend.fetch_todos().await?;
        info!("Loaded {} todos", todos.len());
        Ok(Action::TodosLoaded(todos))
    }

    // ========================
    // Lists
    // ========================

    pub async fn create_list(&self, title: &str) -> ApiResult<Action> {
        let list = self.backend.insert_list(&NewList::new(title)).await?;
        info!("Created list {} ({})", list.id, list.title);
        Ok(Action::ListCreated(list))
    }

    /// Todos of the list stay where they are, both locally and remotely
    pub async fn delete_list(&self, id: &str) -> ApiResult<Action> {
        self.backend.remove_list(id).await?;
        info!("Deleted list {}", id);
        Ok(Action::ListDeleted(id.to_string()))
    }

    // ========================
    // Todos
    // ========================

    pub async fn create_todo(&self, todo: &NewTodo) -> ApiResult<Action> {
        let created = self.backend.insert_todo(todo).await?;
        info!("Created todo {} in list {}", created.id, created.list_id);
        Ok(Action::TodoCreated(created))
    }

    pub async fn delete_todo(&self, id: &str) -> ApiResult<Action> {
        self.backend.remove_todo(id).await?;
        info!("Deleted todo {}", id);
        Ok(Action::TodoDeleted(id.to_string()))
    }

    /// Flip `completed` based on the snapshot taken when the toggle was issued
    ///
    /// Returns `Ok(None)` without any remote call when the id is not in the snapshot.
    pub async fn toggle_todo(&self, snapshot: &TodoState, id: &str) -> ApiResult<Option<Action>> {
        let Some(todo) = snapshot.find_todo(id) else {
            return Ok(None);
        };
        let completed = !todo.completed;

        self.backend.patch_todo(id, &TodoPatch { completed }).await?;
        info!("Todo {} completed={}", id, completed);
        Ok(Some(Action::CompletionSet { id: id.to_string(), completed }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::MemoryBackend;

    fn apply(state: &mut TodoState, action: ApiResult<Action>) {
        state.apply(action.expect("remote call failed"));
    }

    #[tokio::test]
    async fn test_groceries_scenario() {
        let manager = TodoManager::new(MemoryBackend::new());
        let mut state = TodoState::new();

        apply(&mut state, manager.create_list("Groceries").await);
        assert_eq!(state.lists.len(), 1);
        assert_eq!(state.lists[0].id, "1");
        assert_eq!(state.lists[0].title, "Groceries");
        assert!(state.lists[0].created_at.is_some());

        let milk = NewTodo::new("Milk", "1", "2024-01-01", "2%");
        apply(&mut state, manager.create_todo(&milk).await);
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, "1");
        assert_eq!(state.todos[0].list_id, "1");
        assert_eq!(state.todos[0].title, "Milk");
        assert!(!state.todos[0].completed);

        let action = manager.toggle_todo(&state, "1").await.unwrap().unwrap();
        state.apply(action);
        assert!(state.todos[0].completed);

        apply(&mut state, manager.delete_todo("1").await);
        assert!(state.todos.is_empty());
    }

    #[tokio::test]
    async fn test_create_list_appends_exactly_one() {
        let manager = TodoManager::new(MemoryBackend::new());
        let mut state = TodoState::new();
        apply(&mut state, manager.create_list("Work").await);
        apply(&mut state, manager.create_list("Work").await);

        assert_eq!(state.lists.len(), 2);
        assert!(state.lists.iter().all(|l| !l.id.is_empty() && l.title == "Work"));
        assert_ne!(state.lists[0].id, state.lists[1].id);
    }

    #[tokio::test]
    async fn test_delete_list_does_not_cascade() {
        let backend = MemoryBackend::new();
        let manager = TodoManager::new(backend.clone());
        let mut state = TodoState::new();

        apply(&mut state, manager.create_list("A").await);
        apply(&mut state, manager.create_list("B").await);
        apply(&mut state, manager.create_todo(&NewTodo::new("t1", "1", "", "")).await);
        apply(&mut state, manager.create_todo(&NewTodo::new("t2", "2", "", "")).await);

        apply(&mut state, manager.delete_list("1").await);

        assert_eq!(state.lists.len(), 1);
        assert_eq!(state.lists[0].id, "2");
        assert_eq!(state.todos.len(), 2);
        let orphans: Vec<_> = state.orphaned_todos().map(|t| t.title.as_str()).collect();
        assert_eq!(orphans, vec!["t1"]);
        // Remote todos survive too
        assert_eq!(backend.todo_count(), 2);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_value() {
        let manager = TodoManager::new(MemoryBackend::new());
        let mut state = TodoState::new();
        apply(&mut state, manager.create_todo(&NewTodo::new("t", "1", "", "")).await);

        for _ in 0..2 {
            let action = manager.toggle_todo(&state, "1").await.unwrap().unwrap();
            state.apply(action);
        }
        assert!(!state.todos[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_makes_no_call() {
        let backend = MemoryBackend::new();
        let manager = TodoManager::new(backend.clone());
        let state = TodoState::new();

        let result = manager.toggle_todo(&state, "42").await.unwrap();
        assert!(result.is_none());
        assert_eq!(backend.request_count(), 0);
    }

    #[tokio::test]
    async fn test_racing_toggles_apply_in_arrival_order() {
        let manager = TodoManager::new(MemoryBackend::new());
        let mut state = TodoState::new();
        apply(&mut state, manager.create_todo(&NewTodo::new("t", "1", "", "")).await);

        // Both clicks saw completed=false
        let snapshot = state.clone();
        let first = manager.toggle_todo(&snapshot, "1").await.unwrap().unwrap();
        let second = manager.toggle_todo(&snapshot, "1").await.unwrap().unwrap();
        state.apply(first);
        state.apply(second);

        assert!(state.todos[0].completed);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_remote_record() {
        let backend = MemoryBackend::new();
        let manager = TodoManager::new(backend.clone());
        manager.create_list("Keep").await.unwrap();

        backend.fail_next();
        let err = manager.delete_list("1").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { .. }));
        assert_eq!(backend.list_count(), 1);

        // The next attempt goes through
        let action = manager.delete_list("1").await.unwrap();
        assert_eq!(action, Action::ListDeleted("1".into()));
        assert_eq!(backend.list_count(), 0);
    }

    #[tokio::test]
    async fn test_initial_load_populates_both_collections() {
        let backend = MemoryBackend::new();
        let seed = TodoManager::new(backend.clone());
        seed.create_list("L").await.unwrap();
        seed.create_todo(&NewTodo::new("t", "1", "2024-02-02", "c")).await.unwrap();

        let manager = TodoManager::new(backend);
        let mut state = TodoState::new();
        // Arrival order does not matter
        apply(&mut state, manager.load_todos().await);
        apply(&mut state, manager.load_lists().await);

        assert_eq!(state.lists.len(), 1);
        assert_eq!(state.todos_for("1").count(), 1);
    }
}
