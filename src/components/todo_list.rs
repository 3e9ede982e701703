//! Todo List Component
//!
//! Renders the rows, or a placeholder when there is nothing to show.
//! Reads only what it is given; intents go back up through callbacks.

use leptos::prelude::*;
use todo_core::view::{list_view, ListView, EMPTY_PLACEHOLDER};
use todo_core::{Todo, TodoId};

use crate::components::TodoRow;

#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_remove: Callback<TodoId>,
) -> impl IntoView {
    move || match list_view(&todos.get()) {
        ListView::Empty => view! {
            <div class="todos-placeholder">{EMPTY_PLACEHOLDER}</div>
        }
        .into_any(),
        ListView::Rows(rows) => view! {
            <ul class="todo-list">
                {rows
                    .into_iter()
                    .map(|row| view! { <TodoRow row=row on_toggle=on_toggle on_remove=on_remove /> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}
