//! Global Application State Store
//!
//! Uses Leptos reactive_stores; all collection changes go through the reducer.

use leptos::prelude::*;
use reactive_stores::Store;
use tododoo_client::{Action, TodoState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Lists and todos as last confirmed by the server
    pub collections: TodoState,
    /// Last surfaced error, shown in the status banner
    pub status: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a reducer action to the current collections
pub fn store_dispatch(store: &AppStore, action: Action) {
    store.collections().write().apply(action);
}

/// Snapshot of the collections, taken without subscribing
pub fn store_snapshot(store: &AppStore) -> TodoState {
    store.collections().get_untracked()
}
