//! Tododoo Client
//!
//! Layered like the app that uses it:
//! - models: wire records and request payloads
//! - backend: remote store abstraction + REST implementation
//! - state: owned collections and the reducer
//! - manager: remote operations that yield reducer actions

mod backend;
mod config;
mod error;
mod manager;
mod models;
mod state;

#[cfg(test)]
mod testing;

pub use backend::{HttpBackend, TodoBackend};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use manager::TodoManager;
pub use models::{List, NewList, NewTodo, Todo, TodoPatch};
pub use state::{Action, TodoState};
