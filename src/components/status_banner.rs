//! Status Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Shows the last failed remote call until it times out or is dismissed
#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.store.status().get().map(|message| {
            view! {
                <div class="status-banner" role="alert">
                    <span class="status-text">{message}</span>
                    <button class="status-dismiss" on:click=move |_| ctx.dismiss_status()>"×"</button>
                </div>
            }
        })
    }
}
