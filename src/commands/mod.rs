//! Remote API Bindings
//!
//! Frontend transport for the todo GraphQL endpoint.

mod todo;

pub use todo::GraphqlTodoApi;
