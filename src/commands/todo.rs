//! Todo Commands
//!
//! GraphQL over `fetch`, via reqwest's browser backend.

use async_trait::async_trait;
use serde::Serialize;
use todo_core::api::graphql::{self, GraphqlRequest};
use todo_core::{Todo, TodoApi, TodoError, TodoId, TodoResult};

/// Todo API backed by a GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphqlTodoApi {
    endpoint: String,
}

impl GraphqlTodoApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// POST a request and return the status with the raw body
    async fn execute<V: Serialize>(&self, request: &GraphqlRequest<V>) -> TodoResult<(u16, String)> {
        log::debug!("graphql {} -> {}", request.operation_name, self.endpoint);
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TodoError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TodoError::Network(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl TodoApi for GraphqlTodoApi {
    async fn fetch_all(&self) -> TodoResult<Vec<Todo>> {
        let (status, body) = self.execute(&graphql::get_all_todos()).await?;
        graphql::decode_all_todos(status, &body)
    }

    async fn add(&self, title: &str) -> TodoResult<Todo> {
        let (status, body) = self.execute(&graphql::add_todo(title)).await?;
        graphql::decode_add_todo(status, &body)
    }

    async fn remove(&self, id: &TodoId) -> TodoResult<()> {
        let (status, body) = self.execute(&graphql::remove_todo(id)).await?;
        graphql::decode_remove_todo(status, &body)
    }

    async fn toggle_complete(&self, id: &TodoId) -> TodoResult<Vec<Todo>> {
        let (status, body) = self.execute(&graphql::update_todo(id)).await?;
        graphql::decode_update_todo(status, &body)
    }
}
