//! UI Components
//!
//! Leptos components for the todo page.

mod error_banner;
mod header;
mod new_todo_form;
mod progress_bar;
mod search_form;
mod todo_list;
mod todo_row;

pub use error_banner::ErrorBanner;
pub use header::Header;
pub use new_todo_form::NewTodoForm;
pub use progress_bar::ProgressBar;
pub use search_form::SearchForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
