//! GraphQL Wire Codec
//!
//! Request documents and response decoding for the todo GraphQL endpoint.
//! Transport is left to the caller: build a request here, POST it as JSON,
//! hand the status and body back to the matching `decode_*` function.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::domain::{Todo, TodoError, TodoId, TodoResult};

pub const GET_ALL_TODOS: &str = "query GetAllTodos { getAllTodos { id title completed } }";

pub const ADD_TODO: &str =
    "mutation AddTodo($title: TodoInput!) { addTodo(title: $title) { id title completed } }";

pub const REMOVE_TODO: &str = "mutation RemoveTodo($id: ID!) { removeTodo(id: $id) { id } }";

pub const UPDATE_TODO: &str =
    "mutation UpdateTodo($id: ID!) { updateTodo(id: $id) { id title completed } }";

// ========================
// Requests
// ========================

/// JSON body of a GraphQL POST
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<V> {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Serialize)]
pub struct TodoInput<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AddTodoVariables<'a> {
    pub title: TodoInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct IdVariables<'a> {
    pub id: &'a TodoId,
}

pub fn get_all_todos() -> GraphqlRequest<NoVariables> {
    GraphqlRequest {
        query: GET_ALL_TODOS,
        operation_name: "GetAllTodos",
        variables: NoVariables {},
    }
}

pub fn add_todo(title: &str) -> GraphqlRequest<AddTodoVariables<'_>> {
    GraphqlRequest {
        query: ADD_TODO,
        operation_name: "AddTodo",
        variables: AddTodoVariables {
            title: TodoInput { title },
        },
    }
}

pub fn remove_todo(id: &TodoId) -> GraphqlRequest<IdVariables<'_>> {
    GraphqlRequest {
        query: REMOVE_TODO,
        operation_name: "RemoveTodo",
        variables: IdVariables { id },
    }
}

pub fn update_todo(id: &TodoId) -> GraphqlRequest<IdVariables<'_>> {
    GraphqlRequest {
        query: UPDATE_TODO,
        operation_name: "UpdateTodo",
        variables: IdVariables { id },
    }
}

// ========================
// Responses
// ========================

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct AllTodosData {
    #[serde(rename = "getAllTodos")]
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct AddTodoData {
    #[serde(rename = "addTodo")]
    todo: Todo,
}

#[derive(Debug, Deserialize)]
struct UpdateTodoData {
    #[serde(rename = "updateTodo")]
    todos: Vec<Todo>,
}

/// Unwrap a GraphQL envelope.
///
/// The first reported error wins over any partial data. A body that is not
/// an envelope at all is a transport failure when the status is not 2xx.
pub fn decode_response<D: DeserializeOwned>(status: u16, body: &str) -> TodoResult<D> {
    let envelope: GraphqlResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !(200..300).contains(&status) => {
            return Err(TodoError::Network(format!("HTTP {status}")));
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(error) = envelope.errors.into_iter().next() {
        return Err(TodoError::Api(error.message));
    }
    match envelope.data {
        Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
        _ => Err(TodoError::Decode("response carried no data".to_string())),
    }
}

pub fn decode_all_todos(status: u16, body: &str) -> TodoResult<Vec<Todo>> {
    decode_response::<AllTodosData>(status, body).map(|data| data.todos)
}

pub fn decode_add_todo(status: u16, body: &str) -> TodoResult<Todo> {
    decode_response::<AddTodoData>(status, body).map(|data| data.todo)
}

pub fn decode_remove_todo(status: u16, body: &str) -> TodoResult<()> {
    decode_response::<IgnoredAny>(status, body).map(|_| ())
}

pub fn decode_update_todo(status: u16, body: &str) -> TodoResult<Vec<Todo>> {
    decode_response::<UpdateTodoData>(status, body).map(|data| data.todos)
}
