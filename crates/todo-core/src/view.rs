//! List View Derivation
//!
//! Pure mapping from todos to what the list renders. Components only turn
//! these values into markup.

use crate::domain::{Todo, TodoId};
use crate::highlight::{segments, Segment};

pub const EMPTY_PLACEHOLDER: &str = "No todos yet!";

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub completed: bool,
    /// Title text, split into emphasized and plain pieces
    pub label: Vec<Segment>,
}

impl RowView {
    pub fn from_todo(todo: &Todo) -> Self {
        let label = match &todo.highlight {
            Some(highlight) if !highlight.fragments.is_empty() && !highlight.term.is_empty() => {
                segments(highlight)
            }
            _ => vec![Segment::plain(todo.title.clone())],
        };
        Self {
            id: todo.id.clone(),
            completed: todo.completed,
            label,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.completed {
            "todo-row completed"
        } else {
            "todo-row"
        }
    }

    /// Inline style for the title
    pub fn title_style(&self) -> Option<&'static str> {
        self.completed.then_some("text-decoration: line-through;")
    }

    /// Plain text of the label
    pub fn text(&self) -> String {
        self.label.iter().map(|segment| segment.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing to show; render the placeholder
    Empty,
    Rows(Vec<RowView>),
}

pub fn list_view(todos: &[Todo]) -> ListView {
    if todos.is_empty() {
        return ListView::Empty;
    }
    ListView::Rows(todos.iter().map(RowView::from_todo).collect())
}
