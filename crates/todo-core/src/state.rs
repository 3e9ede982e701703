//! Application State
//!
//! The one state record the frontend owns. Only the transition methods
//! below mutate it; the UI reads it through accessors.

use std::mem;

use crate::domain::{dedup_by_id, Highlight, Todo, TodoError, TodoId, TodoResult};
use crate::highlight::TermMatcher;

/// Remote operations that can be in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchAll,
    Add,
    Remove,
    Toggle,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchAll => "fetch_all",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Toggle => "toggle",
        }
    }
}

/// Requests currently in flight, counted per operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    fetch_all: u32,
    add: u32,
    remove: u32,
    toggle: u32,
}

impl InFlight {
    fn slot(&mut self, op: Operation) -> &mut u32 {
        match op {
            Operation::FetchAll => &mut self.fetch_all,
            Operation::Add => &mut self.add,
            Operation::Remove => &mut self.remove,
            Operation::Toggle => &mut self.toggle,
        }
    }

    pub fn start(&mut self, op: Operation) {
        *self.slot(op) += 1;
    }

    pub fn finish(&mut self, op: Operation) {
        let slot = self.slot(op);
        *slot = slot.saturating_sub(1);
    }

    pub fn is_active(&self, op: Operation) -> bool {
        let count = match op {
            Operation::FetchAll => self.fetch_all,
            Operation::Add => self.add,
            Operation::Remove => self.remove,
            Operation::Toggle => self.toggle,
        };
        count > 0
    }

    /// The loading flag: true while any operation is in flight
    pub fn any(&self) -> bool {
        self.is_active(Operation::FetchAll)
            || self.is_active(Operation::Add)
            || self.is_active(Operation::Remove)
            || self.is_active(Operation::Toggle)
    }
}

/// Handle for the error currently on display
///
/// Only the ticket of the most recent error can clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorTicket(u64);

/// Single error message slot with generation tracking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    message: Option<String>,
    generation: u64,
}

impl ErrorSlot {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the message and invalidate every earlier ticket
    pub fn set(&mut self, message: impl Into<String>) -> ErrorTicket {
        self.generation += 1;
        self.message = Some(message.into());
        ErrorTicket(self.generation)
    }

    /// Clear the message if `ticket` is still current
    pub fn expire(&mut self, ticket: ErrorTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.message.take().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    /// API order; locally added todos go first
    todos: Vec<Todo>,
    /// Add field text
    input: String,
    /// Search field text
    search_input: String,
    error: ErrorSlot,
    in_flight: InFlight,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.message()
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.any()
    }

    // ========================
    // Field edits
    // ========================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Take the add field text, leaving it empty
    pub fn take_add_title(&mut self) -> TodoResult<String> {
        let title = mem::take(&mut self.input);
        if title.is_empty() {
            return Err(TodoError::EmptyInput);
        }
        Ok(title)
    }

    /// Take the search field text, leaving it empty
    pub fn take_search_term(&mut self) -> String {
        mem::take(&mut self.search_input)
    }

    // ========================
    // Requests
    // ========================

    pub fn begin(&mut self, op: Operation) {
        self.in_flight.start(op);
    }

    pub fn end(&mut self, op: Operation) {
        self.in_flight.finish(op);
    }

    // ========================
    // List reconciliation
    // ========================

    /// Replace the whole list with an API payload
    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        let before = todos.len();
        self.todos = dedup_by_id(todos);
        if self.todos.len() != before {
            log::warn!(
                "dropped {} todos with duplicate ids",
                before - self.todos.len()
            );
        }
    }

    /// Put a newly created todo at the front
    pub fn prepend_todo(&mut self, todo: Todo) {
        self.todos.retain(|existing| existing.id != todo.id);
        self.todos.insert(0, todo);
    }

    pub fn remove_todo(&mut self, id: &TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| &todo.id != id);
        self.todos.len() != before
    }

    /// Re-annotate every todo for `term`, returning how many matched.
    ///
    /// Previous annotations are always stripped first. Clears the search
    /// field whatever the outcome.
    pub fn apply_search(&mut self, term: &str) -> TodoResult<usize> {
        self.search_input.clear();
        if term.is_empty() {
            return Err(TodoError::EmptyInput);
        }

        let matcher = TermMatcher::new(term);
        for todo in &mut self.todos {
            todo.clear_highlight();
            let Some(fragments) = matcher.as_ref().and_then(|m| m.split(&todo.title)) else {
                continue;
            };
            todo.highlight = Some(Highlight {
                fragments,
                term: term.to_string(),
            });
        }
        Ok(self.todos.iter().filter(|todo| todo.is_highlighted()).count())
    }

    // ========================
    // Errors
    // ========================

    pub fn fail(&mut self, err: &TodoError) -> ErrorTicket {
        self.error.set(err.to_string())
    }

    pub fn expire_error(&mut self, ticket: ErrorTicket) -> bool {
        self.error.expire(ticket)
    }
}
