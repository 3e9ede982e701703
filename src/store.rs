//! Reactive State Store
//!
//! Binds the core state record to a Leptos signal so every transition the
//! controller makes re-renders whatever reads it.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{ErrorTicket, ErrorTimer, StateCell, Todo, TodoState};

/// The app's single state record, held in a signal
#[derive(Clone, Copy)]
pub struct SignalState(RwSignal<TodoState>);

impl SignalState {
    pub fn new() -> Self {
        Self(RwSignal::new(TodoState::new()))
    }

    /// Read-only handle for components
    pub fn read_only(&self) -> ReadSignal<TodoState> {
        self.0.read_only()
    }
}

impl StateCell for SignalState {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// The todo list alone, as its own memo
///
/// Field edits, loading counters and error changes leave the list equal, so
/// readers of this memo are not re-run for them.
pub fn todos_memo(state: ReadSignal<TodoState>) -> Memo<Vec<Todo>> {
    Memo::new(move |_| state.with(|s| s.todos().to_vec()))
}

/// Clears the error banner after a delay
///
/// A pending clear whose ticket was superseded by a newer error does nothing
/// when it fires.
#[derive(Clone, Copy)]
pub struct BannerTimer {
    state: SignalState,
}

impl BannerTimer {
    pub fn new(state: SignalState) -> Self {
        Self { state }
    }
}

impl ErrorTimer for BannerTimer {
    fn schedule_expiry(&self, ticket: ErrorTicket, after: Duration) {
        let state = self.state;
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if state.update(|s| s.expire_error(ticket)) == Some(true) {
                log::debug!("error banner cleared");
            }
        });
    }
}
