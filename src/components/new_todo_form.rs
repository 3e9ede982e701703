//! New Todo Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Submitting empties the field right away; the todo shows up once the API
/// has created it.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let create_todo = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.submit_add().await;
        });
    };

    view! {
        <form class="new-todo-form" autocomplete="off" on:submit=create_todo>
            <input
                type="text"
                class="new-todo-input"
                placeholder="Add your todo"
                aria-label="Add your todo"
                prop:value=move || ctx.state.with(|s| s.input().to_string())
                on:input=move |ev| ctx.controller().set_input(event_target_value(&ev))
            />
        </form>
    }
}
