//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{AppConfig, TodoController, TodoState};

use crate::commands::GraphqlTodoApi;
use crate::store::{BannerTimer, SignalState};

/// Id of the optional `<script type="application/json">` config block
const CONFIG_ELEMENT_ID: &str = "todo-config";

pub type Controller = TodoController<GraphqlTodoApi, SignalState, BannerTimer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current state - read only; all writes go through the controller
    pub state: ReadSignal<TodoState>,
    controller: StoredValue<Controller>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let state = SignalState::new();
        let controller = TodoController::new(
            GraphqlTodoApi::new(config.api_url.clone()),
            state,
            BannerTimer::new(state),
            config.error_timeout(),
        );
        Self {
            state: state.read_only(),
            controller: StoredValue::new(controller),
        }
    }

    /// Handle to the controller, cheap enough to move into a task
    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Config embedded in the page, or build-time defaults
pub fn load_config() -> AppConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(json) = embedded else {
        return AppConfig::default();
    };
    match AppConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            // Logger is not installed yet at this point
            web_sys::console::warn_1(&format!("[CONFIG] {err}, using defaults").into());
            AppConfig::default()
        }
    }
}
