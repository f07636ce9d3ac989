//! List Section Component
//!
//! One list with its todos, filtered by `listId` on every render.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::models::List;
use crate::store::AppStateStoreFields;

#[component]
pub fn ListSection(list: List) -> impl IntoView {
    let ctx = use_app_context();

    let list_id = list.id.clone();
    let delete_id = list.id.clone();

    let todos = move || {
        let state = ctx.store.collections().read();
        let todos: Vec<_> = state.todos_for(&list_id).cloned().collect();
        todos
    };

    let on_delete = move |_| {
        spawn_local(commands::delete_list(ctx, delete_id.clone()));
    };

    view! {
        <li class="list-section">
            <div class="list-header">
                <h2 class="list-title">{list.title}</h2>
                <button class="delete-btn" on:click=on_delete>"Delete List"</button>
            </div>
            <ul class="todo-items">
                <For
                    each=todos
                    // Every rendered field is part of the key so changes re-render the row
                    key=|todo| (
                        todo.id.clone(),
                        todo.title.clone(),
                        todo.deadline.clone(),
                        todo.content.clone(),
                        todo.completed,
                    )
                    children=|todo| view! { <TodoRow todo=todo /> }
                />
            </ul>
        </li>
    }
}
