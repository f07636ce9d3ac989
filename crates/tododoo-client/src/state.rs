//! Local State + Reducer
//!
//! Owned copy of both collections. Changes arrive only as `Action`s,
//! produced after the matching remote call succeeded.

use crate::models::{List, Todo};

/// One local state change
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ListsLoaded(Vec<List>),
    TodosLoaded(Vec<Todo>),
    ListCreated(List),
    /// Todos pointing at the list are left alone
    ListDeleted(String),
    TodoCreated(Todo),
    TodoDeleted(String),
    /// Replaces only the `completed` flag of the matching todo
    CompletionSet { id: String, completed: bool },
}

/// In-memory lists and todos
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    pub lists: Vec<List>,
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action to the current state
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ListsLoaded(lists) => self.lists = lists,
            Action::TodosLoaded(todos) => self.todos = todos,
            Action::ListCreated(list) => self.lists.push(list),
            Action::ListDeleted(id) => self.lists.retain(|list| list.id != id),
            Action::TodoCreated(todo) => self.todos.push(todo),
            Action::TodoDeleted(id) => self.todos.retain(|todo| todo.id != id),
            Action::CompletionSet { id, completed } => {
                for todo in self.todos.iter_mut().filter(|todo| todo.id == id) {
                    todo.completed = completed;
                }
            }
        }
    }

    /// Consuming form of [`TodoState::apply`]
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    pub fn find_list(&self, id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn find_todo(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Todos belonging to a list, in collection order
    pub fn todos_for<'a>(&'a self, list_id: &'a str) -> impl Iterator<Item = &'a Todo> + 'a {
        self.todos.iter().filter(move |todo| todo.list_id == list_id)
    }

    /// Todos whose list no longer exists
    pub fn orphaned_todos(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.todos
            .iter()
            .filter(move |todo| self.find_list(&todo.list_id).is_none())
    }
}
