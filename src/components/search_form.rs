//! Search Form Component
//!
//! Highlights matching titles on submit. Purely local, no request.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_app_context();

    let search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.controller().submit_search();
    };

    view! {
        <form class="search-form" autocomplete="off" on:submit=search>
            <input
                type="text"
                class="search-input"
                placeholder="Enter search text"
                aria-label="Enter search text"
                prop:value=move || ctx.state.with(|s| s.search_input().to_string())
                on:input=move |ev| ctx.controller().set_search_input(event_target_value(&ev))
            />
        </form>
    }
}
