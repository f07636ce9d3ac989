//! Tododoo Frontend App
//!
//! Header, forms and the nested list/todo view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{Header, ListSection, NewListForm, NewTodoForm, StatusBanner};
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Two independent loads on mount; whichever lands first is shown first
    spawn_local(commands::load_lists(ctx));
    spawn_local(commands::load_todos(ctx));

    let lists = move || ctx.store.collections().read().lists.clone();
    let counts = move || {
        let state = ctx.store.collections().read();
        format!("{} lists, {} todos", state.lists.len(), state.todos.len())
    };

    view! {
        <Header />
        <main class="container">
            <h1>"My Todo App"</h1>

            <StatusBanner />

            <NewListForm />

            <ul class="lists">
                <For
                    each=lists
                    key=|list| (list.id.clone(), list.title.clone())
                    children=|list| view! { <ListSection list=list /> }
                />
            </ul>

            <NewTodoForm />

            <p class="item-count">{counts}</p>
        </main>
    }
}
