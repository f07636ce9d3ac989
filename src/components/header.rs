//! Header Component

use leptos::prelude::*;

/// Static banner
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"Tododoo"</h1>
            <p class="app-tagline">"- Welcome to Tododoo."</p>
        </header>
    }
}
