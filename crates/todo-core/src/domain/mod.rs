//! Domain Layer
//!
//! Core entities and error types.

mod entity;
mod error;
mod todo;

pub use entity::{dedup_by_id, Entity};
pub use error::{TodoError, TodoResult};
pub use todo::{Highlight, Todo, TodoId};
