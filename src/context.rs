//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tododoo_client::{Action, ApiError, ClientConfig, HttpBackend, TodoManager, TodoState};

use crate::store::{store_dispatch, store_snapshot, AppState, AppStateStoreFields, AppStore};

/// How long an error stays in the status banner
const STATUS_TIMEOUT_MS: u32 = 5_000;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Lists, todos and status
    pub store: AppStore,
    /// Remote operations against the configured store
    manager: StoredValue<TodoManager<HttpBackend>>,
    /// Bumped on every reported error so stale timers leave newer messages alone
    status_generation: StoredValue<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let config = ClientConfig::from_build_env();
        log::info!("Using API base {}", config.base_url);
        Self {
            store: Store::new(AppState::default()),
            manager: StoredValue::new(TodoManager::new(HttpBackend::new(config))),
            status_generation: StoredValue::new(0),
        }
    }

    pub fn manager(&self) -> TodoManager<HttpBackend> {
        self.manager.get_value()
    }

    pub fn dispatch(&self, action: Action) {
        store_dispatch(&self.store, action);
    }

    pub fn snapshot(&self) -> TodoState {
        store_snapshot(&self.store)
    }

    /// Log a failed remote call and show it in the status banner for a while
    pub fn report(&self, what: &str, err: &ApiError) {
        log::error!("{} failed: {}", what, err);
        *self.store.status().write() = Some(format!("{} failed: {}", what, err));

        self.status_generation.update_value(|g| *g = g.wrapping_add(1));
        let generation = self.status_generation.get_value();
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(STATUS_TIMEOUT_MS).await;
            if ctx.status_generation.get_value() == generation {
                ctx.dismiss_status();
            }
        });
    }

    pub fn dismiss_status(&self) {
        *self.store.status().write() = None;
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
