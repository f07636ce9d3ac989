//! New List Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;

/// Title input + "Add List"; cleared once the server confirmed the insert
#[component]
pub fn NewListForm() -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        spawn_local(async move {
            if commands::create_list(ctx, text).await {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <form class="new-list-form" on:submit=submit>
            <input
                type="text"
                placeholder="Enter list title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_title.set(input.value());
                    }
                }
            />
            <button type="submit">"Add List"</button>
        </form>
    }
}
