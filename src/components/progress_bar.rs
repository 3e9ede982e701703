//! Progress Bar Component
//!
//! Thin indeterminate bar shown while any request is in flight.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let ctx = use_app_context();
    let loading = move || ctx.state.with(|s| s.is_loading());

    view! {
        <Show when=loading>
            <div class="loader" role="progressbar" aria-busy="true">
                <div class="loader-bar"></div>
            </div>
        </Show>
    }
}
