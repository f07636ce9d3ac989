//! List Commands

use crate::context::AppContext;

pub async fn load_lists(ctx: AppContext) {
    match ctx.manager().load_lists().await {
        Ok(action) => ctx.dispatch(action),
        Err(e) => ctx.report("Loading lists", &e),
    }
}

/// Returns whether the list was created, so the form knows to clear itself
pub async fn create_list(ctx: AppContext, title: String) -> bool {
    match ctx.manager().create_list(&title).await {
        Ok(action) => {
            ctx.dispatch(action);
            true
        }
        Err(e) => {
            ctx.report("Creating list", &e);
            false
        }
    }
}

pub async fn delete_list(ctx: AppContext, id: String) {
    match ctx.manager().delete_list(&id).await {
        Ok(action) => ctx.dispatch(action),
        Err(e) => ctx.report("Deleting list", &e),
    }
}
