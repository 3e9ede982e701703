//! Todo List Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = context::load_config();
    logger::init(config.log_level());
    log::info!("todo list using API at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
