//! Error Banner Component
//!
//! Shows the current error until the controller's timer clears it.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let message = move || ctx.state.with(|s| s.error().map(str::to_string));

    view! {
        <Show when=move || message().is_some()>
            <div class="error-banner" role="alert">
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
