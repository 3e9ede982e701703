//! Todo Entity
//!
//! A single list entry as the remote API returns it, plus the transient
//! highlight a local search attaches to it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Identifier assigned by the remote API. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Search annotation: the title split at every match of `term`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlight {
    /// Title fragments in original order, matches kept with their casing
    pub fragments: Vec<String>,
    /// The term the fragments were computed for, as typed
    pub term: String,
}

/// A todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Set by a local search only; never decoded or sent over the wire
    #[serde(skip)]
    pub highlight: Option<Highlight>,
}

impl Todo {
    /// Create a fresh, incomplete todo
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            highlight: None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
