//! Todo List App
//!
//! Root component: wires the controller into context and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{AppConfig, TodoId};

use crate::components::{ErrorBanner, Header, NewTodoForm, ProgressBar, SearchForm, TodoList};
use crate::context::AppContext;
use crate::store::todos_memo;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.load().await;
        });
    });

    let todos = todos_memo(ctx.state);

    let on_toggle = Callback::new(move |id: TodoId| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.toggle(id).await;
        });
    });

    let on_remove = Callback::new(move |id: TodoId| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.remove(id).await;
        });
    });

    view! {
        <ProgressBar />
        <div class="container">
            <Header />
            <ErrorBanner />
            <SearchForm />
            <NewTodoForm />
            <TodoList todos=todos on_toggle=on_toggle on_remove=on_remove />
        </div>
    }
}

