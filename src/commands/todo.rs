//! Todo Commands

use tododoo_client::{NewTodo, TodoState};

use crate::context::AppContext;

pub async fn load_todos(ctx: AppContext) {
    match ctx.manager().load_todos().await {
        Ok(action) => ctx.dispatch(action),
        Err(e) => ctx.report("Loading todos", &e),
    }
}

pub async fn create_todo(ctx: AppContext, todo: NewTodo) -> bool {
    match ctx.manager().create_todo(&todo).await {
        Ok(action) => {
            ctx.dispatch(action);
            true
        }
        Err(e) => {
            ctx.report("Creating todo", &e);
            false
        }
    }
}

pub async fn delete_todo(ctx: AppContext, id: String) {
    match ctx.manager().delete_todo(&id).await {
        Ok(action) => ctx.dispatch(action),
        Err(e) => ctx.report("Deleting todo", &e),
    }
}

/// `snapshot` must be taken when the click happens, not when the task runs
pub async fn toggle_todo(ctx: AppContext, snapshot: TodoState, id: String) {
    match ctx.manager().toggle_todo(&snapshot, &id).await {
        Ok(Some(action)) => ctx.dispatch(action),
        Ok(None) => log::debug!("Toggle ignored, todo {} not loaded", id),
        Err(e) => ctx.report("Updating todo", &e),
    }
}
