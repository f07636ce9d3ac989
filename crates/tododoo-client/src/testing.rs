//! In-memory backend used by the manager tests
//!
//! Mimics the hosted store: ids are sequential strings per resource starting
//! at "1", `createdAt` is stamped on insert, unknown ids answer 404.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;

use crate::backend::TodoBackend;
use crate::error::{ApiError, ApiResult};
use crate::models::{List, NewList, NewTodo, Todo, TodoPatch};

#[derive(Default)]
struct Store {
    lists: Vec<List>,
    todos: Vec<Todo>,
    next_list_id: u32,
    next_todo_id: u32,
    requests: usize,
    fail_next: bool,
}

impl Store {
    /// Count the request and consume a pending injected failure
    fn begin(&mut self) -> ApiResult<()> {
        self.requests += 1;
        if std::mem::take(&mut self.fail_next) {
            return Err(ApiError::from_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                "injected failure".to_string(),
            ));
        }
        Ok(())
    }
}

fn not_found() -> ApiError {
    ApiError::from_status(StatusCode::NOT_FOUND, "\"Not found\"".to_string())
}

#[derive(Clone, Default)]
pub struct MemoryBackend {
    store: Arc<Mutex<Store>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next request fail with a 500
    pub fn fail_next(&self) {
        self.store.lock().unwrap().fail_next = true;
    }

    pub fn request_count(&self) -> usize {
        self.store.lock().unwrap().requests
    }

    pub fn list_count(&self) -> usize {
        self.store.lock().unwrap().lists.len()
    }

    pub fn todo_count(&self) -> usize {
        self.store.lock().unwrap().todos.len()
    }
}

#[async_trait(?Send)]
impl TodoBackend for MemoryBackend {
    async fn fetch_lists(&self) -> ApiResult<Vec<List>> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        Ok(store.lists.clone())
    }

    async fn insert_list(&self, list: &NewList) -> ApiResult<List> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        store.next_list_id += 1;
        let created = List {
            id: store.next_list_id.to_string(),
            title: list.title.clone(),
            created_at: Some(Utc::now()),
            todos: Vec::new(),
        };
        store.lists.push(created.clone());
        Ok(created)
    }

    async fn remove_list(&self, id: &str) -> ApiResult<()> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        let before = store.lists.len();
        store.lists.retain(|list| list.id != id);
        if store.lists.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn fetch_todos(&self) -> ApiResult<Vec<Todo>> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        Ok(store.todos.clone())
    }

    async fn insert_todo(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        store.next_todo_id += 1;
        let created = Todo {
            id: store.next_todo_id.to_string(),
            list_id: todo.list_id.clone(),
            title: todo.title.clone(),
            content: todo.content.clone(),
            deadline: todo.deadline.clone(),
            completed: todo.completed(),
        };
        store.todos.push(created.clone());
        Ok(created)
    }

    async fn remove_todo(&self, id: &str) -> ApiResult<()> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        let before = store.todos.len();
        store.todos.retain(|todo| todo.id != id);
        if store.todos.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn patch_todo(&self, id: &str, patch: &TodoPatch) -> ApiResult<()> {
        let mut store = self.store.lock().unwrap();
        store.begin()?;
        let todo = store
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(not_found)?;
        todo.completed = patch.completed;
        Ok(())
    }
}
