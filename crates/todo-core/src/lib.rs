//! Todo Core
//!
//! Everything the todo list frontend does that does not touch the DOM:
//! - domain: todo entity, identifiers and errors
//! - highlight: case-insensitive search fragment splitting
//! - state: the single state record and its transitions
//! - api: remote API contract and GraphQL wire codec
//! - controller: async flows tying the API to the state
//! - view: pure list rendering derivation
//! - config: runtime settings

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod highlight;
pub mod state;
pub mod view;

pub use api::TodoApi;
pub use config::AppConfig;
pub use controller::{ErrorTimer, StateCell, TodoController};
pub use domain::{Highlight, Todo, TodoError, TodoId, TodoResult};
pub use state::{ErrorTicket, Operation, TodoState};
