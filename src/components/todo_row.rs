//! Todo Row Component
//!
//! A single todo in the list.

use leptos::prelude::*;
use todo_core::highlight::Segment;
use todo_core::view::RowView;
use todo_core::TodoId;

/// One row: checkbox, title and delete button.
///
/// Clicking anywhere on the row toggles it. The delete button stops the
/// click there so a delete never also toggles.
#[component]
pub fn TodoRow(
    row: RowView,
    on_toggle: Callback<TodoId>,
    on_remove: Callback<TodoId>,
) -> impl IntoView {
    let toggle_id = row.id.clone();
    let remove_id = row.id.clone();
    let class = row.class();
    let title_style = row.title_style();
    let completed = row.completed;
    let text = row.text();

    let label = row
        .label
        .into_iter()
        .map(|Segment { text, emphasized }| {
            if emphasized {
                view! { <b>{text}</b> }.into_any()
            } else {
                text.into_any()
            }
        })
        .collect_view();

    view! {
        <li class=class on:click=move |_| on_toggle.run(toggle_id.clone())>
            // Mirrors `completed` only; the click itself bubbles to the row
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                aria-label=text
                tabindex="-1"
                on:click=|ev| ev.prevent_default()
            />
            <span class="todo-title" style=title_style>{label}</span>
            <button
                class="delete-button"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(remove_id.clone());
                }
            >
                "✕"
            </button>
        </li>
    }
}
