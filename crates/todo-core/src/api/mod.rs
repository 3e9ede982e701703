//! Remote API Contract
//!
//! The todo list talks to a single remote service. This trait is the whole
//! contract; the browser transport lives in the frontend crate and tests
//! use in-memory fakes.

pub mod graphql;

use async_trait::async_trait;

use crate::domain::{Todo, TodoId, TodoResult};

/// Remote todo operations
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Every todo, in the order the API keeps them
    async fn fetch_all(&self) -> TodoResult<Vec<Todo>>;

    /// Create a todo and return it with its assigned id
    async fn add(&self, title: &str) -> TodoResult<Todo>;

    async fn remove(&self, id: &TodoId) -> TodoResult<()>;

    /// Flip completion. Answers with the full refreshed list.
    async fn toggle_complete(&self, id: &TodoId) -> TodoResult<Vec<Todo>>;
}
