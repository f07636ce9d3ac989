//! New Todo Form Component
//!
//! Title, deadline, content and a list selector offering every loaded list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;
use crate::models::TodoDraft;
use crate::store::AppStateStoreFields;

fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(TodoDraft::default());
    let lists = move || ctx.store.collections().read().lists.clone();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = draft.get().to_new_todo(&lists());
        spawn_local(async move {
            if commands::create_todo(ctx, payload).await {
                draft.update(|d| d.reset_inputs());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Enter todo title"
                prop:value=move || draft.read().title.clone()
                on:input=move |ev| {
                    if let Some(v) = input_value(&ev) {
                        draft.update(|d| d.title = v);
                    }
                }
            />
            <input
                type="date"
                prop:value=move || draft.read().deadline.clone()
                on:input=move |ev| {
                    if let Some(v) = input_value(&ev) {
                        draft.update(|d| d.deadline = v);
                    }
                }
            />
            <input
                type="text"
                placeholder="Enter todo content"
                prop:value=move || draft.read().content.clone()
                on:input=move |ev| {
                    if let Some(v) = input_value(&ev) {
                        draft.update(|d| d.content = v);
                    }
                }
            />
            <select
                prop:value=move || draft.read().selected_list_id(&lists())
                on:change=move |ev| {
                    let selected = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                        .map(|select| select.value());
                    if let Some(id) = selected {
                        draft.update(|d| d.list_id = Some(id));
                    }
                }
            >
                <For
                    each=lists
                    key=|list| (list.id.clone(), list.title.clone())
                    children=|list| view! { <option value=list.id.clone()>{list.title}</option> }
                />
            </select>
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
