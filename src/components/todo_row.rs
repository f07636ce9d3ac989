//! Todo Row Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use tododoo_client::TodoState;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::AppStateStoreFields;

/// Checkbox value for a todo: the stored flag, or `fallback` once it is gone
fn checked_for(state: &TodoState, id: &str, fallback: bool) -> bool {
    state.find_todo(id).map(|todo| todo.completed).unwrap_or(fallback)
}

/// Checkbox, title, deadline, content and delete button for one todo
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id.clone();
    let checked_id = id.clone();
    let toggle_id = id.clone();
    let completed = todo.completed;

    // Follows the store only, so a click alone never moves the box
    let checked = move || checked_for(&ctx.store.collections().read(), &checked_id, completed);

    let on_toggle = move |ev: web_sys::Event| {
        // Snapshot now: the negation is computed from what the user saw
        let snapshot = ctx.snapshot();
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            input.set_checked(checked_for(&snapshot, &toggle_id, completed));
        }
        spawn_local(commands::toggle_todo(ctx, snapshot, toggle_id.clone()));
    };

    let on_delete = move |_| {
        spawn_local(commands::delete_todo(ctx, id.clone()));
    };

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <div class="todo-main">
                <input type="checkbox" prop:checked=checked on:change=on_toggle />
                <span class="todo-title">{todo.title}</span>
            </div>
            <div class="todo-meta">
                <span class="todo-deadline">{todo.deadline}</span>
                <span class="todo-content">{todo.content}</span>
                <button class="delete-btn" on:click=on_delete>"Delete Todo"</button>
            </div>
        </li>
    }
}
